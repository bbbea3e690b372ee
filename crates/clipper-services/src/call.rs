use tracing::warn;

use clipper_common::BackendError;

/// Log a failed backend call before handing the error back.
///
/// Failures never roll back local state and never trigger a refresh; the
/// caller decides what to do with the returned error.
pub(crate) trait LogFailure {
    fn log_failure(self, call: &'static str) -> Self;
}

impl<T> LogFailure for Result<T, BackendError> {
    fn log_failure(self, call: &'static str) -> Self {
        if let Err(e) = &self {
            warn!(call, error = %e, "backend call failed");
        }
        self
    }
}
