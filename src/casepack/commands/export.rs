use crate::archive;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CaseStore;

/// Bundles the current collection into a zip archive.
///
/// The result carries the bytes and the suggested file name; writing them
/// somewhere is the host's job.
pub fn run(store: &CaseStore, problem_id: &str) -> Result<CmdResult> {
    let export = archive::build(problem_id, store.cases())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} test case(s) to {}.",
        store.len(),
        export.file_name
    )));
    Ok(result.with_export(export))
}
