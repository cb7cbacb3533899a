//! Session context.
//!
//! Provides the logging context for one wizard session.

use uuid::Uuid;

use crate::logging::structured::LogContext;

/// Context for a single wizard session.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub session_id: String,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session_id: format!("sess-{}", &Uuid::new_v4().to_string()[..8]),
        }
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.session_id)
    }

    /// Context scoped to one application within this session.
    pub fn app_context(&self, app_id: &str) -> LogContext {
        self.log_context().with_app(app_id)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
