use crate::commands::{resolve_number, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CaseStore;

/// Removes the case at the given display number; later cases renumber.
pub fn run(store: &mut CaseStore, number: usize) -> Result<CmdResult> {
    let index = resolve_number(store, number)?;
    store.remove(index)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Test case {} deleted; {} remaining.",
        number,
        store.len()
    )));
    Ok(result)
}
