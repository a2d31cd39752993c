//! The dispatch loop and its result types.
//!
//! Dispatch is single-threaded and synchronous: each path fully walks the
//! chain to a terminal state before the next path is submitted. The chain
//! topology is read-only during the loop, so there is no shared mutable
//! state across dispatches.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chain::{HandlerChain, Outcome};

/// The terminal state of one dispatched path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRecord {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Counts over one dispatch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchSummary {
    pub recognized: usize,
    pub skipped: usize,
}

impl DispatchSummary {
    /// Total number of dispatched paths.
    #[must_use]
    pub fn total(self) -> usize {
        self.recognized + self.skipped
    }
}

/// Records plus summary for one dispatch run, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReport {
    pub records: Vec<DispatchRecord>,
    pub summary: DispatchSummary,
}

impl DispatchReport {
    pub fn new(records: Vec<DispatchRecord>) -> Self {
        let summary = records.iter().fold(
            DispatchSummary::default(),
            |mut summary, record| {
                if record.outcome.is_recognized() {
                    summary.recognized += 1;
                } else {
                    summary.skipped += 1;
                }
                summary
            },
        );
        Self { records, summary }
    }
}

/// Feed `paths` into the head of `chain`, one at a time, in order.
///
/// Every dispatch is a bounded call chain of length at most
/// [`chain.len()`](HandlerChain::len); the loop cannot fail.
pub fn dispatch_all<I, P>(chain: &HandlerChain, paths: I) -> Vec<DispatchRecord>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    paths
        .into_iter()
        .map(|path| {
            let path = path.into();
            let outcome = chain.dispatch(&path);
            DispatchRecord { path, outcome }
        })
        .collect()
}
