//! Common API DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Standard response envelope.
///
/// Every endpoint wraps its payload in this envelope. `messages` carries the
/// user-facing status messages; on failure `error` additionally joins them
/// into one line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request was handled successfully
    pub success: bool,
    /// Payload, `null` on failure
    pub data: Option<T>,
    /// User-facing status messages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
    /// Error description, `null` on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            messages: Vec::new(),
            error: None,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            messages: vec![message.into()],
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::errors(vec![message.into()])
    }

    pub fn errors(messages: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(messages.join("; ")),
            messages,
        }
    }
}

/// The `sort_option` form field, shared by the room list, the room detail
/// view and the reservation list
#[derive(Debug, Deserialize, IntoParams)]
pub struct SortQuery {
    /// `"1"` / `"2"`; anything else falls back to the default order
    pub sort_option: Option<String>,
}

// ── Tests ──────────────────────────────────────────────────────
