//! Wire envelope
//!
//! Every response is one JSON object:
//!
//! ```json
//! {"status": "ok", "output": {"count": 3}}
//! {"status": "error", "error": {"code": "NotFound", "message": "...", "details": {"isbn": 7}}}
//! ```
//!
//! Error codes are [`StoreError::error_code`]; `details` carries the
//! variant's fields so the client can rebuild the exact error.

use crate::command::Output;
use bookstore_core::{Isbn, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Structured failure as carried on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireError {
    /// Canonical error code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Variant fields, if any
    pub details: Option<Value>,
}

impl WireError {
    /// Create a wire error without details
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Rebuild the store error
    ///
    /// An unknown code or malformed details become a `Transport` error:
    /// the peer answered, but not in a form this client understands.
    pub fn to_store_error(&self) -> StoreError {
        self.decode().unwrap_or_else(|| {
            StoreError::transport(format!(
                "unrecognized {} error: {}",
                self.code, self.message
            ))
        })
    }

    fn decode(&self) -> Option<StoreError> {
        let details = self.details.as_ref();
        let isbn = || detail(details, "isbn").and_then(Value::as_i64).map(Isbn::new);
        let count = |name: &str| detail(details, name).and_then(Value::as_u64);
        let text = |name: &str| {
            detail(details, name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let error = match self.code.as_str() {
            "Validation" => StoreError::Validation {
                reason: text("reason")?,
            },
            "Duplicate" => StoreError::Duplicate { isbn: isbn()? },
            "NotFound" => StoreError::NotFound { isbn: isbn()? },
            "InsufficientStock" => StoreError::InsufficientStock {
                isbn: isbn()?,
                requested: count("requested")?,
                available: count("available")?,
            },
            "SampleSize" => StoreError::SampleSize {
                requested: usize::try_from(count("requested")?).ok()?,
                available: usize::try_from(count("available")?).ok()?,
            },
            "Transport" => StoreError::Transport {
                message: text("message")?,
            },
            _ => return None,
        };
        Some(error)
    }
}

fn detail<'a>(details: Option<&'a Value>, name: &str) -> Option<&'a Value> {
    details.and_then(|d| d.get(name))
}

impl From<&StoreError> for WireError {
    fn from(error: &StoreError) -> Self {
        let details = match error {
            StoreError::Validation { reason } => json!({ "reason": reason }),
            StoreError::Duplicate { isbn } | StoreError::NotFound { isbn } => {
                json!({ "isbn": isbn.get() })
            }
            StoreError::InsufficientStock {
                isbn,
                requested,
                available,
            } => json!({
                "isbn": isbn.get(),
                "requested": requested,
                "available": available,
            }),
            StoreError::SampleSize {
                requested,
                available,
            } => json!({ "requested": requested, "available": available }),
            StoreError::Transport { message } => json!({ "message": message }),
        };
        WireError {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: Some(details),
        }
    }
}

/// Response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    /// The command succeeded
    Ok {
        /// What it produced
        output: Output,
    },
    /// The command failed without effect
    Error {
        /// Why
        error: WireError,
    },
}

impl Response {
    /// Wrap an execution result
    pub fn from_result(result: bookstore_core::Result<Output>) -> Self {
        match result {
            Ok(output) => Response::Ok { output },
            Err(e) => Response::Error {
                error: WireError::from(&e),
            },
        }
    }

    /// Unwrap back into an execution result
    pub fn into_result(self) -> bookstore_core::Result<Output> {
        match self {
            Response::Ok { output } => Ok(output),
            Response::Error { error } => Err(error.to_store_error()),
        }
    }

    /// Encode as JSON
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            json!({
                "status": "error",
                "error": {
                    "code": "Transport",
                    "message": format!("response encoding failed: {}", err),
                    "details": { "message": err.to_string() },
                },
            })
            .to_string()
        })
    }

    /// Decode from JSON
    pub fn decode(text: &str) -> bookstore_core::Result<Self> {
        serde_json::from_str(text)
            .map_err(|err| StoreError::transport(format!("malformed response: {}", err)))
    }
}
