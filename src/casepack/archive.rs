//! Zip export.
//!
//! The archive is built in one synchronous pass, entirely in memory; the
//! host decides where the bytes land. Entry names follow the widely used
//! `{id}_Input_TestCase_{n}.txt` / `{id}_Output_TestCase_{n}.txt` layout
//! with contiguous 1-based numbering, so a re-export after edits or deletes
//! always renumbers from 1.

use crate::error::{CasepackError, Result};
use crate::model::TestCase;
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

/// An assembled export: the zip bytes plus the suggested file name.
#[derive(Debug)]
pub struct ExportArchive {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Bundles the collection into a DEFLATE-compressed zip.
///
/// Rejects a blank problem id and an empty collection; nothing is produced
/// on failure. Each entry's payload is the stored field plus one trailing
/// newline.
pub fn build(problem_id: &str, cases: &[TestCase]) -> Result<ExportArchive> {
    let problem_id = problem_id.trim();
    if problem_id.is_empty() {
        return Err(CasepackError::InvalidArgument(
            "a problem id is required".to_string(),
        ));
    }
    if cases.is_empty() {
        return Err(CasepackError::InvalidArgument(
            "no test cases to export".to_string(),
        ));
    }

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    // Fixed mtime: re-exporting an unchanged collection must yield
    // byte-identical archives.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    for (i, case) in cases.iter().enumerate() {
        let n = i + 1;

        zip.start_file(format!("{problem_id}_Input_TestCase_{n}.txt"), options)?;
        zip.write_all(case.input.as_bytes())?;
        zip.write_all(b"\n")?;

        zip.start_file(format!("{problem_id}_Output_TestCase_{n}.txt"), options)?;
        zip.write_all(case.output.as_bytes())?;
        zip.write_all(b"\n")?;
    }

    let bytes = zip.finish()?.into_inner();
    Ok(ExportArchive {
        file_name: format!("{problem_id}_TestCases.zip"),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn case(input: &str, output: &str) -> TestCase {
        TestCase::new(input.to_string(), output.to_string())
    }

    fn entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn writes_paired_entries_with_trailing_newline() {
        let cases = vec![case("2\n", "4\n")];
        let export = build("100A", &cases).unwrap();

        assert_eq!(export.file_name, "100A_TestCases.zip");
        assert_eq!(entry(&export.bytes, "100A_Input_TestCase_1.txt"), "2\n");
        assert_eq!(entry(&export.bytes, "100A_Output_TestCase_1.txt"), "4\n");
    }

    #[test]
    fn numbers_entries_contiguously_in_order() {
        let cases = vec![case("a", "1"), case("b", "2"), case("c", "3")];
        let export = build("1942G", &cases).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(export.bytes)).unwrap();
        assert_eq!(archive.len(), 6);
        for n in 1..=3 {
            assert!(archive
                .by_name(&format!("1942G_Input_TestCase_{n}.txt"))
                .is_ok());
            assert!(archive
                .by_name(&format!("1942G_Output_TestCase_{n}.txt"))
                .is_ok());
        }
    }

    #[test]
    fn multiline_payloads_round_trip() {
        let cases = vec![case("3\n1 2 3", "6")];
        let export = build("55B", &cases).unwrap();
        assert_eq!(entry(&export.bytes, "55B_Input_TestCase_1.txt"), "3\n1 2 3\n");
    }

    #[test]
    fn rejects_blank_problem_id() {
        let cases = vec![case("a", "1")];
        let err = build("   ", &cases).unwrap_err();
        assert!(matches!(err, CasepackError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_empty_collection() {
        let err = build("100A", &[]).unwrap_err();
        assert!(matches!(err, CasepackError::InvalidArgument(_)));
    }

    #[test]
    fn rebuild_of_unchanged_collection_is_byte_identical() {
        let cases = vec![case("a\nb", "c"), case("d", "e")];
        let first = build("100A", &cases).unwrap();
        let second = build("100A", &cases).unwrap();
        assert_eq!(first.bytes, second.bytes);
    }
}
