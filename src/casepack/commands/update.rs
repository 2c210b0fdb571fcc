use crate::commands::{resolve_number, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CaseStore;

/// Replaces the case at the given display number with re-entered text.
pub fn run(store: &mut CaseStore, number: usize, input: String, output: String) -> Result<CmdResult> {
    let index = resolve_number(store, number)?;
    store.replace(index, input, output)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Test case {} updated.", number)));
    Ok(result)
}
