use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::parser::parse_transcript;
use crate::store::CaseStore;

/// Parses a pasted judge transcript and appends every extracted pair.
pub fn run(store: &mut CaseStore, text: &str) -> Result<CmdResult> {
    let added = store.add(parse_transcript(text));

    let mut result = CmdResult::default();
    if added > 0 {
        result.add_message(CmdMessage::success(format!(
            "Added {} test case(s) from pasted text.",
            added
        )));
    } else {
        result.add_message(CmdMessage::warning(
            "No test cases found in the pasted text.",
        ));
    }
    Ok(result)
}
