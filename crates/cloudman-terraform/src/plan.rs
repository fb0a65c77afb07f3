//! Plan exit-code decoding
//!
//! `terraform plan -detailed-exitcode` overloads the exit code: 0 and 2 are
//! both success, 1 is a genuine error. The distinction matters — applying
//! after a planning *error* (as opposed to pending changes) would be a
//! destructive-action safety bug, so the mapping lives in exactly one place.

use crate::cli::OperationResult;

/// Decoded result of a plan invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutcome {
    /// Succeeded with an empty diff; nothing to apply.
    NoChanges,
    /// Plan failed.
    Error,
    /// Succeeded with a non-empty diff; changes are pending.
    ChangesPending,
    /// An exit code outside the documented contract.
    Other(i32),
}

impl PlanOutcome {
    /// Map a raw plan exit code. A signal-killed plan (no code) counts as
    /// an error: never proceed toward apply on an indeterminate plan.
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => PlanOutcome::NoChanges,
            Some(1) | None => PlanOutcome::Error,
            Some(2) => PlanOutcome::ChangesPending,
            Some(other) => PlanOutcome::Other(other),
        }
    }

    pub fn from_result(result: &OperationResult) -> Self {
        Self::from_code(result.code)
    }
}
