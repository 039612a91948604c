//! Failures collected across the sources of one settings load.

use std::{error::Error, fmt, sync::Arc};

use super::BuilderError;
use crate::BuilderResult;

/// Failures met while loading settings, in the order the sources were read.
///
/// A failing source does not stop the next one from being read, so a single
/// load can report a broken document and a bad override at once.
#[derive(Debug, Default)]
pub struct LoadFailures(Vec<Arc<BuilderError>>);

impl LoadFailures {
    /// Keeps the failure of `outcome`, if any, and hands back its value.
    pub fn record<T>(&mut self, outcome: BuilderResult<T>) -> Option<T> {
        outcome.map_err(|err| self.0.push(err)).ok()
    }

    /// The recorded failures, oldest first.
    #[must_use = "iterators should be consumed to inspect failures"]
    pub fn errors(&self) -> impl Iterator<Item = &BuilderError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Succeeds when nothing failed.
    ///
    /// # Errors
    ///
    /// A lone failure is returned unchanged. Several become
    /// [`BuilderError::Aggregate`].
    pub fn into_result(mut self) -> BuilderResult<()> {
        match self.0.len() {
            0 => Ok(()),
            1 => Err(self.0.remove(0)),
            _ => Err(Arc::new(BuilderError::Aggregate(Box::new(self)))),
        }
    }
}

impl fmt::Display for LoadFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut failures = self.errors();
        if let Some(first) = failures.next() {
            write!(f, "  - {first}")?;
        }
        for failure in failures {
            write!(f, "\n  - {failure}")?;
        }
        Ok(())
    }
}

impl Error for LoadFailures {}
