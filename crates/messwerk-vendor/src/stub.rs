// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub SDK for desktop/CI builds where the vendor library is not linked.
//
// Every vendor action returns `PlatformUnavailable` — the real
// implementation lives in the `android` module.

use serde_json::{Map, Value};

use messwerk_core::error::{MesswerkError, Result};
use messwerk_core::types::{AppIdentity, DeviceType, HostContext, PageMode, SdkCapabilities};

use crate::traits::*;

/// No-op SDK returned on non-mobile platforms.
pub struct StubSdk;

impl AnalyticsSdk for StubSdk {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }

    fn platform_version(&self) -> String {
        // No OS version to report without the native SDK; the build
        // architecture still identifies the binary in diagnostics.
        std::env::consts::ARCH.to_string()
    }

    fn capabilities(&self) -> Result<SdkCapabilities> {
        Ok(SdkCapabilities {
            structured_events: false,
            sdk_version: None,
        })
    }
}

impl SdkLifecycle for StubSdk {
    fn pre_init(&self, _ctx: &HostContext, identity: &AppIdentity) -> Result<()> {
        tracing::warn!(app_key = %identity.app_key, "SdkLifecycle::pre_init called on stub SDK");
        Err(MesswerkError::PlatformUnavailable)
    }

    fn init(&self, _ctx: &HostContext, identity: &AppIdentity, _device: DeviceType) -> Result<()> {
        tracing::warn!(app_key = %identity.app_key, "SdkLifecycle::init called on stub SDK");
        Err(MesswerkError::PlatformUnavailable)
    }

    fn set_log_enabled(&self, _enabled: bool) -> Result<()> {
        Err(MesswerkError::PlatformUnavailable)
    }

    fn set_wrapper_type(&self, _kind: &str, _version: &str) -> Result<()> {
        Err(MesswerkError::PlatformUnavailable)
    }
}

impl EventTracking for StubSdk {
    fn record_event(
        &self,
        _ctx: &HostContext,
        name: &str,
        _properties: Option<&Map<String, Value>>,
    ) -> Result<()> {
        tracing::warn!(event = name, "EventTracking::record_event called on stub SDK");
        Err(MesswerkError::PlatformUnavailable)
    }
}

impl PageTracking for StubSdk {
    fn set_page_mode(&self, _mode: PageMode) -> Result<()> {
        Err(MesswerkError::PlatformUnavailable)
    }

    fn page_start(&self, _name: &str) -> Result<()> {
        Err(MesswerkError::PlatformUnavailable)
    }

    fn page_end(&self, _name: &str) -> Result<()> {
        Err(MesswerkError::PlatformUnavailable)
    }
}

impl UserIdentity for StubSdk {
    fn profile_sign_in(&self, _user_id: &str) -> Result<()> {
        tracing::warn!("UserIdentity::profile_sign_in called on stub SDK");
        Err(MesswerkError::PlatformUnavailable)
    }

    fn profile_sign_off(&self) -> Result<()> {
        Err(MesswerkError::PlatformUnavailable)
    }
}

impl ErrorReporting for StubSdk {
    fn report_error(&self, _ctx: &HostContext, _description: &str) -> Result<()> {
        tracing::warn!("ErrorReporting::report_error called on stub SDK");
        Err(MesswerkError::PlatformUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_reports_no_structured_events_and_does_not_fail() {
        let caps = StubSdk.capabilities().expect("probe must not fail");
        assert!(!caps.structured_events);
        assert!(caps.sdk_version.is_none());
    }

    #[test]
    fn actions_answer_platform_unavailable() {
        let err = StubSdk.profile_sign_off().expect_err("no vendor linked");
        assert!(matches!(err, MesswerkError::PlatformUnavailable));
    }

    #[test]
    fn factory_selects_the_stub_off_device() {
        let sdk = crate::analytics_sdk();
        assert_eq!(sdk.platform_name(), "Desktop (stub)");
        assert!(!sdk.platform_version().is_empty());
    }
}
