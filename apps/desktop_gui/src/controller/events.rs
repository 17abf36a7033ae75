//! Backend-to-UI events and error modeling for the catalog browser.

use shared::{
    domain::Product,
    error::{ErrorCode, LoadError},
};

pub enum UiEvent {
    Info(String),
    CatalogLoaded(Vec<Product>),
    CatalogFailed(LoadError),
    SearchSettled(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Decode,
    Configuration,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    CatalogLoad,
}

pub fn classify_load_failure(err: &LoadError) -> String {
    match err.code {
        ErrorCode::Timeout => {
            "Catalog server did not answer in time; showing an empty catalog.".to_string()
        }
        ErrorCode::Network => {
            "Catalog server unreachable; check the endpoint or network.".to_string()
        }
        ErrorCode::HttpStatus => format!("Catalog server rejected the request: {}", err.message),
        ErrorCode::Decode => "Catalog response was not in the expected format.".to_string(),
        ErrorCode::Internal => format!("Catalog client error: {}", err.message),
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("timed out")
            || message_lower.contains("timeout")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("unreachable")
        {
            UiErrorCategory::Transport
        } else if message_lower.contains("malformed")
            || message_lower.contains("decode")
            || message_lower.contains("expected format")
        {
            UiErrorCategory::Decode
        } else if message_lower.contains("endpoint")
            || message_lower.contains("settings")
            || message_lower.contains("runtime")
        {
            UiErrorCategory::Configuration
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_load_error(err: &LoadError) -> Self {
        let category = match err.code {
            ErrorCode::Timeout | ErrorCode::Network | ErrorCode::HttpStatus => {
                UiErrorCategory::Transport
            }
            ErrorCode::Decode => UiErrorCategory::Decode,
            ErrorCode::Internal => UiErrorCategory::Configuration,
        };
        Self {
            category,
            context: UiErrorContext::CatalogLoad,
            message: classify_load_failure(err),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
