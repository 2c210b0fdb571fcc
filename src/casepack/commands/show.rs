use crate::commands::{resolve_number, CmdResult, ListedCase};
use crate::error::{CasepackError, Result};
use crate::store::CaseStore;

/// Returns one case in full, by display number.
pub fn run(store: &CaseStore, number: usize) -> Result<CmdResult> {
    let index = resolve_number(store, number)?;
    let case = store
        .get(index)
        .cloned()
        .ok_or(CasepackError::OutOfRange(number))?;

    Ok(CmdResult::default().with_listed(vec![ListedCase { number, case }]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_the_requested_case() {
        let mut store = CaseStore::new();
        store.add(vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]);

        let result = run(&store, 2).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].number, 2);
        assert_eq!(result.listed[0].case.output, "2");
    }

    #[test]
    fn unknown_number_is_out_of_range() {
        let store = CaseStore::new();
        assert!(matches!(
            run(&store, 1),
            Err(CasepackError::OutOfRange(1))
        ));
    }
}
