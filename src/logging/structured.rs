//! Structured logging utilities.
//!
//! Provides context-aware logging with session_id and app_id included
//! in every log message.

use std::fmt;

/// Logging context for a wizard session.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub session_id: String,
    pub app_id: Option<String>,
}

impl LogContext {
    pub fn new(session_id: &str) -> Self {
        Self {
            session_id: session_id.to_string(),
            app_id: None,
        }
    }

    pub fn with_app(&self, app_id: &str) -> Self {
        Self {
            session_id: self.session_id.clone(),
            app_id: Some(app_id.to_string()),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.app_id {
            Some(aid) => write!(f, "[session={}] [app={}]", self.session_id, aid),
            None => write!(f, "[session={}]", self.session_id),
        }
    }
}
