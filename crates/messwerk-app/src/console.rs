// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dev-mode vendor SDK that records every action to the log and succeeds.
//
// Lets the demo run end-to-end on a desktop where the native vendor
// library is not linked.

use serde_json::{Map, Value};

use messwerk_core::error::Result;
use messwerk_core::types::{AppIdentity, DeviceType, HostContext, PageMode, SdkCapabilities};
use messwerk_vendor::traits::*;

/// Console-backed stand-in for the vendor SDK.
pub struct ConsoleSdk;

impl AnalyticsSdk for ConsoleSdk {
    fn platform_name(&self) -> &str {
        "Desktop"
    }

    fn platform_version(&self) -> String {
        std::env::consts::ARCH.to_string()
    }

    fn capabilities(&self) -> Result<SdkCapabilities> {
        Ok(SdkCapabilities {
            structured_events: true,
            sdk_version: Some("dev".to_string()),
        })
    }
}

impl SdkLifecycle for ConsoleSdk {
    fn pre_init(&self, _ctx: &HostContext, identity: &AppIdentity) -> Result<()> {
        tracing::info!(app_key = %identity.app_key, channel = %identity.channel, "vendor: pre-init");
        Ok(())
    }

    fn init(&self, _ctx: &HostContext, identity: &AppIdentity, device: DeviceType) -> Result<()> {
        tracing::info!(app_key = %identity.app_key, ?device, "vendor: init");
        Ok(())
    }

    fn set_log_enabled(&self, enabled: bool) -> Result<()> {
        tracing::info!(enabled, "vendor: logging toggled");
        Ok(())
    }

    fn set_wrapper_type(&self, kind: &str, version: &str) -> Result<()> {
        tracing::info!(kind, version, "vendor: wrapper tag");
        Ok(())
    }
}

impl EventTracking for ConsoleSdk {
    fn record_event(
        &self,
        _ctx: &HostContext,
        name: &str,
        properties: Option<&Map<String, Value>>,
    ) -> Result<()> {
        tracing::info!(event = name, properties = ?properties, "vendor: event");
        Ok(())
    }
}

impl PageTracking for ConsoleSdk {
    fn set_page_mode(&self, mode: PageMode) -> Result<()> {
        tracing::info!(?mode, "vendor: page collection mode");
        Ok(())
    }

    fn page_start(&self, name: &str) -> Result<()> {
        tracing::info!(page = name, "vendor: page start");
        Ok(())
    }

    fn page_end(&self, name: &str) -> Result<()> {
        tracing::info!(page = name, "vendor: page end");
        Ok(())
    }
}

impl UserIdentity for ConsoleSdk {
    fn profile_sign_in(&self, user_id: &str) -> Result<()> {
        tracing::info!(user_id, "vendor: sign-in");
        Ok(())
    }

    fn profile_sign_off(&self) -> Result<()> {
        tracing::info!("vendor: sign-off");
        Ok(())
    }
}

impl ErrorReporting for ConsoleSdk {
    fn report_error(&self, _ctx: &HostContext, description: &str) -> Result<()> {
        tracing::info!(description, "vendor: non-fatal error");
        Ok(())
    }
}
