// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Typed request payloads, one variant per recognized message name.
//
// The wire contract is loosely typed: arguments arrive as a single map or
// an ordered list per message. Decoding happens once, here, at the
// boundary; required fields with the wrong shape surface as a
// `DecodeError` instead of silently flowing onward. Optional fields keep
// the contract's forgiving behavior: a wrong-shaped optional falls back to
// its default.

use serde_json::{Map, Value};
use thiserror::Error;

use messwerk_core::types::{AppIdentity, PageMode};

use crate::call::MethodCall;

/// A recognized framework message, decoded into its typed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// `getPlatformVersion` — answer the platform name + OS version string.
    PlatformVersion,
    /// `preInit` — pre-initialize the SDK and grant policy consent.
    PreInit(AppIdentity),
    /// `initCommon` — full SDK initialization for the phone device class.
    InitCommon(AppIdentity),
    /// `onEvent` — record a custom event, optionally with properties.
    Event {
        name: String,
        properties: Option<Map<String, Value>>,
    },
    /// `onProfileSignIn` — associate subsequent events with a user id.
    ProfileSignIn { user_id: String },
    /// `onProfileSignOff` — clear the user identity association.
    ProfileSignOff,
    /// `setPageCollectionModeAuto` / `setPageCollectionModeManual`.
    SetPageMode(PageMode),
    /// `onPageStart` — manual page-view start.
    PageStart { page: String },
    /// `onPageEnd` — manual page-view end.
    PageEnd { page: String },
    /// `reportError` — report a non-fatal error description.
    ReportError { description: String },
}

/// Why a call could not be decoded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("unknown method {0:?}")]
    UnknownMethod(String),

    #[error("{method}: arguments missing or not {expected}")]
    MissingArguments {
        method: &'static str,
        expected: &'static str,
    },

    #[error("{method}: required field {field:?} missing or not a string")]
    BadField {
        method: &'static str,
        field: &'static str,
    },
}

impl Request {
    /// Decode a wire call into its typed payload.
    pub fn decode(call: &MethodCall) -> Result<Self, DecodeError> {
        let args = call.args.as_ref();
        match call.method.as_str() {
            "getPlatformVersion" => Ok(Self::PlatformVersion),
            "preInit" => decode_pre_init(args),
            "initCommon" => decode_init_common(args),
            "onEvent" => decode_event(args),
            "onProfileSignIn" => {
                let list = as_list("onProfileSignIn", args)?;
                Ok(Self::ProfileSignIn {
                    user_id: required_string(list, 0, "onProfileSignIn", "userId")?,
                })
            }
            "onProfileSignOff" => Ok(Self::ProfileSignOff),
            "setPageCollectionModeAuto" => Ok(Self::SetPageMode(PageMode::Auto)),
            "setPageCollectionModeManual" => Ok(Self::SetPageMode(PageMode::Manual)),
            "onPageStart" => {
                let list = as_list("onPageStart", args)?;
                Ok(Self::PageStart {
                    page: required_string(list, 0, "onPageStart", "pageName")?,
                })
            }
            "onPageEnd" => {
                let list = as_list("onPageEnd", args)?;
                Ok(Self::PageEnd {
                    page: required_string(list, 0, "onPageEnd", "pageName")?,
                })
            }
            "reportError" => {
                let list = as_list("reportError", args)?;
                Ok(Self::ReportError {
                    description: required_string(list, 0, "reportError", "error")?,
                })
            }
            other => Err(DecodeError::UnknownMethod(other.to_string())),
        }
    }
}

/// `preInit` arguments arrive as a map: `appKey` and `channel` required.
fn decode_pre_init(args: Option<&Value>) -> Result<Request, DecodeError> {
    let map = args
        .and_then(Value::as_object)
        .ok_or(DecodeError::MissingArguments {
            method: "preInit",
            expected: "a map",
        })?;
    let app_key = map
        .get("appKey")
        .and_then(Value::as_str)
        .ok_or(DecodeError::BadField {
            method: "preInit",
            field: "appKey",
        })?;
    let channel = map
        .get("channel")
        .and_then(Value::as_str)
        .ok_or(DecodeError::BadField {
            method: "preInit",
            field: "channel",
        })?;
    Ok(Request::PreInit(AppIdentity {
        app_key: app_key.to_string(),
        channel: channel.to_string(),
        push_secret: None,
    }))
}

/// `initCommon` arguments arrive as an ordered list:
/// `[0]` app key (required), `[2]` channel (optional, default `""`),
/// `[3]` push secret (optional). Slot 1 is reserved by the wire contract
/// and ignored on this platform.
fn decode_init_common(args: Option<&Value>) -> Result<Request, DecodeError> {
    let list = as_list("initCommon", args)?;
    let app_key = required_string(list, 0, "initCommon", "appKey")?;
    let channel = optional_string(list, 2).unwrap_or_default();
    let push_secret = optional_string(list, 3);
    Ok(Request::InitCommon(AppIdentity {
        app_key,
        channel,
        push_secret,
    }))
}

/// `onEvent` arguments arrive as an ordered list: `[0]` event name
/// (required), `[1]` property map (optional).
fn decode_event(args: Option<&Value>) -> Result<Request, DecodeError> {
    let list = as_list("onEvent", args)?;
    let name = required_string(list, 0, "onEvent", "eventName")?;
    let properties = list
        .get(1)
        .and_then(Value::as_object)
        .cloned();
    Ok(Request::Event { name, properties })
}

fn as_list<'a>(
    method: &'static str,
    args: Option<&'a Value>,
) -> Result<&'a Vec<Value>, DecodeError> {
    args.and_then(Value::as_array)
        .ok_or(DecodeError::MissingArguments {
            method,
            expected: "an ordered list",
        })
}

fn required_string(
    list: &[Value],
    index: usize,
    method: &'static str,
    field: &'static str,
) -> Result<String, DecodeError> {
    list.get(index)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(DecodeError::BadField { method, field })
}

/// Optional positional string: absent or wrong-shaped values fall back to
/// `None`, per the contract's forgiving treatment of optional fields.
fn optional_string(list: &[Value], index: usize) -> Option<String> {
    list.get(index).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(method: &str, args: Value) -> Result<Request, DecodeError> {
        Request::decode(&MethodCall::with_args(method, args))
    }

    #[test]
    fn platform_version_takes_no_arguments() {
        let request = Request::decode(&MethodCall::new("getPlatformVersion"));
        assert_eq!(request, Ok(Request::PlatformVersion));
    }

    #[test]
    fn pre_init_decodes_map_fields() {
        let request = decode("preInit", json!({"appKey": "k-1", "channel": "store"}));
        assert_eq!(
            request,
            Ok(Request::PreInit(AppIdentity {
                app_key: "k-1".into(),
                channel: "store".into(),
                push_secret: None,
            }))
        );
    }

    #[test]
    fn pre_init_requires_channel() {
        let request = decode("preInit", json!({"appKey": "k-1"}));
        assert_eq!(
            request,
            Err(DecodeError::BadField {
                method: "preInit",
                field: "channel",
            })
        );
    }

    #[test]
    fn init_common_decodes_full_list() {
        // Slot 1 is reserved; a decoder must skip it, not consume it.
        let request = decode(
            "initCommon",
            json!(["k-1", "other-platform-key", "store", "push-secret"]),
        );
        assert_eq!(
            request,
            Ok(Request::InitCommon(AppIdentity {
                app_key: "k-1".into(),
                channel: "store".into(),
                push_secret: Some("push-secret".into()),
            }))
        );
    }

    #[test]
    fn init_common_defaults_optional_fields() {
        let request = decode("initCommon", json!(["k-1"]));
        assert_eq!(
            request,
            Ok(Request::InitCommon(AppIdentity {
                app_key: "k-1".into(),
                channel: String::new(),
                push_secret: None,
            }))
        );
    }

    #[test]
    fn init_common_tolerates_wrong_shaped_optionals() {
        let request = decode("initCommon", json!(["k-1", null, 7, false]));
        assert_eq!(
            request,
            Ok(Request::InitCommon(AppIdentity {
                app_key: "k-1".into(),
                channel: String::new(),
                push_secret: None,
            }))
        );
    }

    #[test]
    fn event_decodes_name_and_properties() {
        let request = decode("onEvent", json!(["purchase", {"sku": "a-7", "count": 2}]));
        match request {
            Ok(Request::Event { name, properties }) => {
                assert_eq!(name, "purchase");
                let properties = properties.expect("properties present");
                assert_eq!(properties.get("sku"), Some(&json!("a-7")));
                assert_eq!(properties.get("count"), Some(&json!(2)));
            }
            other => panic!("unexpected decode result: {other:?}"),
        }
    }

    #[test]
    fn event_without_properties_decodes() {
        let request = decode("onEvent", json!(["launch"]));
        assert_eq!(
            request,
            Ok(Request::Event {
                name: "launch".into(),
                properties: None,
            })
        );
    }

    #[test]
    fn event_with_malformed_name_is_a_bad_field() {
        let request = decode("onEvent", json!([42]));
        assert_eq!(
            request,
            Err(DecodeError::BadField {
                method: "onEvent",
                field: "eventName",
            })
        );
    }

    #[test]
    fn event_with_map_arguments_is_missing_arguments() {
        let request = decode("onEvent", json!({"eventName": "launch"}));
        assert_eq!(
            request,
            Err(DecodeError::MissingArguments {
                method: "onEvent",
                expected: "an ordered list",
            })
        );
    }

    #[test]
    fn page_mode_messages_need_no_arguments() {
        assert_eq!(
            Request::decode(&MethodCall::new("setPageCollectionModeAuto")),
            Ok(Request::SetPageMode(PageMode::Auto))
        );
        assert_eq!(
            Request::decode(&MethodCall::new("setPageCollectionModeManual")),
            Ok(Request::SetPageMode(PageMode::Manual))
        );
    }

    #[test]
    fn unknown_method_is_reported_by_name() {
        let request = Request::decode(&MethodCall::new("onDeepLink"));
        assert_eq!(
            request,
            Err(DecodeError::UnknownMethod("onDeepLink".to_string()))
        );
    }
}
