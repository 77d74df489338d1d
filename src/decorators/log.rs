use std::sync::Arc;

use async_trait::async_trait;

use crate::controllers::Controller;
use crate::data::protocols::LogErrorRepository;
use crate::http::{HttpRequest, HttpResponse};

/// Records the trace of every server fault produced by the wrapped controller
///
/// The wrapped response is returned untouched. A failing log write is
/// reported through tracing and otherwise ignored.
pub struct LogControllerDecorator {
    controller: Arc<dyn Controller>,
    log_error_repository: Arc<dyn LogErrorRepository>,
}

impl LogControllerDecorator {
    pub fn new(
        controller: Arc<dyn Controller>,
        log_error_repository: Arc<dyn LogErrorRepository>,
    ) -> Self {
        Self {
            controller,
            log_error_repository,
        }
    }
}

#[async_trait]
impl Controller for LogControllerDecorator {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let response = self.controller.handle(request).await;

        if response.is_server_error() {
            if let Some(stack) = response.error_body().and_then(|error| error.stack()) {
                if let Err(e) = self.log_error_repository.log_error(stack).await {
                    tracing::error!("Failed to record server error: {:#}", e);
                }
            }
        }

        response
    }
}
