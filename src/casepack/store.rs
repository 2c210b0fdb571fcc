//! The session's test case collection.
//!
//! A [`CaseStore`] is a dense, ordered sequence owned by the running session.
//! It starts empty, lives in memory only, and dies with the process; the
//! exported archive is the sole durable artifact. Positions are 0-based
//! here — the command layer owns the translation from the 1-based numbers
//! shown to the user.

use crate::error::{CasepackError, Result};
use crate::model::TestCase;

#[derive(Debug, Default)]
pub struct CaseStore {
    cases: Vec<TestCase>,
}

impl CaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn get(&self, index: usize) -> Option<&TestCase> {
        self.cases.get(index)
    }

    /// Appends pairs in order, trimming both fields and dropping any pair
    /// that is left with an empty side. Returns how many were kept; the
    /// collection never stores an incomplete case.
    pub fn add<I>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut added = 0;
        for (input, output) in pairs {
            let case = TestCase::new(input, output);
            if case.is_complete() {
                self.cases.push(case);
                added += 1;
            }
        }
        added
    }

    /// Overwrites the case at `index` with trimmed values.
    ///
    /// Unlike [`CaseStore::add`], no completeness check applies here: an
    /// edit may blank out a field.
    pub fn replace(&mut self, index: usize, input: String, output: String) -> Result<()> {
        let slot = self
            .cases
            .get_mut(index)
            .ok_or(CasepackError::OutOfRange(index))?;
        *slot = TestCase::new(input, output);
        Ok(())
    }

    /// Removes the case at `index`; later cases shift down one position.
    pub fn remove(&mut self, index: usize) -> Result<TestCase> {
        if index >= self.cases.len() {
            return Err(CasepackError::OutOfRange(index));
        }
        Ok(self.cases.remove(index))
    }
}
