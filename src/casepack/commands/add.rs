use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CaseStore;

/// Adds one manually entered pair.
pub fn run(store: &mut CaseStore, input: String, output: String) -> Result<CmdResult> {
    let added = store.add([(input, output)]);

    let mut result = CmdResult::default();
    if added > 0 {
        result.add_message(CmdMessage::success(format!(
            "Test case {} added.",
            store.len()
        )));
    } else {
        result.add_message(CmdMessage::warning(
            "Both input and output are required; nothing was added.",
        ));
    }
    Ok(result)
}
