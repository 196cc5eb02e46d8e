// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Messwerk analytics bridge.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Opaque handle to the host application environment.
///
/// The embedding host constructs one at attach time; the platform vendor
/// layer downcasts it to whatever native representation it needs (an
/// Activity reference on Android, nothing at all on desktop). The adapter
/// itself never looks inside — it only tracks presence.
#[derive(Clone)]
pub struct HostContext {
    inner: Arc<dyn Any + Send + Sync>,
}

impl HostContext {
    /// Wrap a platform handle.
    pub fn new<T: Any + Send + Sync>(handle: T) -> Self {
        Self {
            inner: Arc::new(handle),
        }
    }

    /// Borrow the underlying handle as a concrete type, if it is one.
    pub fn downcast_ref<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HostContext(..)")
    }
}

/// Application identity handed to the vendor SDK at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppIdentity {
    /// Vendor-issued application key.
    pub app_key: String,
    /// Distribution channel label. The wire contract allows omitting it,
    /// in which case it defaults to the empty string.
    pub channel: String,
    /// Push integration secret, when the app uses the vendor's push add-on.
    pub push_secret: Option<String>,
}

impl AppIdentity {
    pub fn new(app_key: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            channel: String::new(),
            push_secret: None,
        }
    }
}

/// Device class reported to the vendor SDK at full initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    /// Handset or tablet. The bridge always initializes for this class.
    Phone,
    /// Set-top box / TV device.
    SetTopBox,
}

impl DeviceType {
    /// Numeric constant from the vendor SDK's published interface.
    pub fn vendor_code(&self) -> i32 {
        match self {
            Self::Phone => 1,
            Self::SetTopBox => 2,
        }
    }
}

/// Page-view collection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageMode {
    /// The vendor SDK tracks page views on its own.
    Auto,
    /// The host reports page starts/ends explicitly.
    Manual,
}

impl PageMode {
    /// Numeric constant from the vendor SDK's published interface.
    pub fn vendor_code(&self) -> i32 {
        match self {
            Self::Auto => 1,
            Self::Manual => 2,
        }
    }
}

/// What the linked vendor SDK build supports, as reported by the
/// capability probe at attach time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SdkCapabilities {
    /// Whether the SDK exposes the structured-event entry point
    /// (events with a property map). Older builds only take a bare name.
    pub structured_events: bool,
    /// Vendor SDK version string, when the SDK reports one.
    pub sdk_version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_context_downcasts_to_wrapped_type() {
        let ctx = HostContext::new(42u32);
        assert_eq!(ctx.downcast_ref::<u32>(), Some(&42));
        assert!(ctx.downcast_ref::<String>().is_none());
    }

    #[test]
    fn device_type_codes_match_vendor_interface() {
        assert_eq!(DeviceType::Phone.vendor_code(), 1);
        assert_eq!(DeviceType::SetTopBox.vendor_code(), 2);
    }

    #[test]
    fn app_identity_defaults_channel_to_empty() {
        let id = AppIdentity::new("abc123");
        assert_eq!(id.channel, "");
        assert!(id.push_secret.is_none());
    }
}
