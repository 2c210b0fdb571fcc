//! Judge-transcript parsing.
//!
//! Online judges render each test of a submission as a block introduced by a
//! `Test: #<n>` marker, with the stdin under an `Input` label, the produced
//! stdout under `Output`, and the jury's expected output under `Answer`.
//! [`parse_transcript`] extracts the (input, output) pairs from one pasted
//! blob of that text.

use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Test: #\d+").expect("block marker pattern"));

// Each section runs from its label line to the next label (or end of block).
static INPUT_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)Input\n(.*?)(?:\nOutput|\z)").expect("input section pattern"));
static OUTPUT_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)Output\n(.*?)(?:\nAnswer|\z)").expect("output section pattern"));

/// Extracts ordered (input, output) pairs from a pasted judge transcript.
///
/// Text before the first `Test: #<n>` marker is discarded. A block that is
/// missing the `Input` or `Output` label, or whose sections trim down to
/// nothing, is skipped without affecting its neighbours. Deterministic and
/// side-effect free.
pub fn parse_transcript(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for block in BLOCK_MARKER.split(text).skip(1) {
        let input = INPUT_SECTION
            .captures(block)
            .map(|c| c[1].trim().to_string());
        let output = OUTPUT_SECTION
            .captures(block)
            .map(|c| c[1].trim().to_string());

        if let (Some(input), Some(output)) = (input, output) {
            if !input.is_empty() && !output.is_empty() {
                pairs.push((input, output));
            }
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_block() {
        let text = "Test: #1\nInput\n3\n1 2 3\nOutput\n6\nAnswer: OK";
        let pairs = parse_transcript(text);
        assert_eq!(pairs, vec![("3\n1 2 3".to_string(), "6".to_string())]);
    }

    #[test]
    fn parses_blocks_in_source_order() {
        let text = "Test: #1\nInput\na\nOutput\nx\nAnswer\nx\n\
                    Test: #2\nInput\nb\nOutput\ny\nAnswer\ny\n\
                    Test: #3\nInput\nc\nOutput\nz\n";
        let pairs = parse_transcript(text);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], ("a".to_string(), "x".to_string()));
        assert_eq!(pairs[1], ("b".to_string(), "y".to_string()));
        assert_eq!(pairs[2], ("c".to_string(), "z".to_string()));
    }

    #[test]
    fn discards_text_before_first_marker() {
        let text = "Verdict: Wrong answer on test 2\n\nTest: #1\nInput\n1\nOutput\n2\n";
        let pairs = parse_transcript(text);
        assert_eq!(pairs, vec![("1".to_string(), "2".to_string())]);
    }

    #[test]
    fn block_missing_output_is_skipped_without_affecting_neighbours() {
        let text = "Test: #1\nInput\na\n\
                    Test: #2\nInput\nb\nOutput\ny\n";
        let pairs = parse_transcript(text);
        assert_eq!(pairs, vec![("b".to_string(), "y".to_string())]);
    }

    #[test]
    fn block_with_empty_sections_is_skipped() {
        let text = "Test: #1\nInput\n\nOutput\n\nAnswer\nok\n";
        assert!(parse_transcript(text).is_empty());
    }

    #[test]
    fn no_markers_yields_nothing() {
        assert!(parse_transcript("Input\n1\nOutput\n2\n").is_empty());
        assert!(parse_transcript("").is_empty());
    }

    #[test]
    fn marker_numbers_are_ignored() {
        // Numbering in the transcript carries no meaning; order of
        // appearance is what counts.
        let text = "Test: #7\nInput\na\nOutput\nx\nTest: #7\nInput\nb\nOutput\ny\n";
        let pairs = parse_transcript(text);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "a");
        assert_eq!(pairs[1].0, "b");
    }

    #[test]
    fn interior_blank_lines_are_preserved() {
        let text = "Test: #1\nInput\n1 2\n\n3 4\nOutput\nok\n";
        let pairs = parse_transcript(text);
        assert_eq!(pairs[0].0, "1 2\n\n3 4");
    }
}
