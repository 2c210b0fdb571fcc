use crate::commands::{CmdResult, ListedCase};
use crate::error::Result;
use crate::store::CaseStore;

/// Lists every case with its current 1-based number.
pub fn run(store: &CaseStore) -> Result<CmdResult> {
    let listed = store
        .cases()
        .iter()
        .enumerate()
        .map(|(i, case)| ListedCase {
            number: i + 1,
            case: case.clone(),
        })
        .collect();

    Ok(CmdResult::default().with_listed(listed))
}
