use std::sync::Arc;

use clipper_bridge::Backend;
use clipper_common::BackendError;

use crate::call::LogFailure;

/// Window-level actions owned by the backend.
pub struct WindowActions {
    backend: Arc<dyn Backend>,
}

impl WindowActions {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub async fn hide(&self) -> Result<(), BackendError> {
        self.backend.hide_window().await.log_failure("hide_window")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;

    #[tokio::test]
    async fn hide_calls_backend() {
        let backend = FakeBackend::new();
        WindowActions::new(backend.clone()).hide().await.unwrap();
        assert_eq!(backend.call_names(), ["hide_window"]);
    }
}
