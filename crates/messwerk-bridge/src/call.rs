// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Wire types for the method channel.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error code carried by every generic-error response. The contract has a
/// single error bucket; the free-text message is the only detail.
pub const ERROR_CODE: &str = "METRICORE_ERROR";

/// One named call arriving from the application framework.
///
/// Arguments are either a single map or an ordered list depending on the
/// message, encoded here as a raw JSON value and decoded into a typed
/// [`crate::Request`] at the dispatch boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    /// Message name, e.g. `"onEvent"`.
    pub method: String,
    /// Raw argument payload; absent for argument-less messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
}

impl MethodCall {
    /// An argument-less call.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: None,
        }
    }

    /// A call carrying an argument payload.
    pub fn with_args(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args: Some(args),
        }
    }
}

/// The response delivered back over the channel for one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodResponse {
    /// The call completed. Only `getPlatformVersion` carries a payload.
    Success {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    /// The message name is not part of the recognized surface.
    NotImplemented,
    /// The single generic error bucket: fixed code, free-text message.
    Error { code: String, message: String },
}

impl MethodResponse {
    /// Success with no payload.
    pub fn success() -> Self {
        Self::Success { payload: None }
    }

    /// Success carrying a payload.
    pub fn success_with(payload: Value) -> Self {
        Self::Success {
            payload: Some(payload),
        }
    }

    /// The generic error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            code: ERROR_CODE.to_string(),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_carries_fixed_code() {
        let response = MethodResponse::error("boom");
        assert_eq!(
            response,
            MethodResponse::Error {
                code: ERROR_CODE.to_string(),
                message: "boom".to_string(),
            }
        );
    }

    #[test]
    fn plain_success_has_no_payload() {
        match MethodResponse::success() {
            MethodResponse::Success { payload } => assert!(payload.is_none()),
            other => panic!("unexpected response: {other:?}"),
        }
    }
}
