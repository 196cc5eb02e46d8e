// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the vendor analytics SDK.
//
// Each trait covers one vendor concern. The bridge only ever holds the
// combined `AnalyticsSdk` supertrait; splitting keeps the per-concern
// surface small and lets tests fake exactly what they exercise.

use serde_json::{Map, Value};

use messwerk_core::error::Result;
use messwerk_core::types::{AppIdentity, DeviceType, HostContext, PageMode, SdkCapabilities};

/// Unified seam that groups all vendor SDK entry points.
///
/// Implementations that lack the native library (desktop, CI) return
/// `MesswerkError::PlatformUnavailable` from every action.
pub trait AnalyticsSdk:
    SdkLifecycle + EventTracking + PageTracking + UserIdentity + ErrorReporting + Send + Sync
{
    /// Human-readable platform name (e.g. "Android").
    fn platform_name(&self) -> &str;

    /// OS version identifier (e.g. "14").
    fn platform_version(&self) -> String;

    /// Capability probe: ask the linked vendor build what it supports.
    ///
    /// Called once per attach. Callers treat any error as "capabilities
    /// unknown" — the result is diagnostic and never gates dispatch.
    fn capabilities(&self) -> Result<SdkCapabilities>;
}

/// Two-phase SDK initialization plus attach-time housekeeping.
pub trait SdkLifecycle {
    /// Pre-initialize with the app identity and grant policy consent.
    /// Permits limited operation before full init.
    fn pre_init(&self, ctx: &HostContext, identity: &AppIdentity) -> Result<()>;

    /// Full initialization for the given device class.
    fn init(&self, ctx: &HostContext, identity: &AppIdentity, device: DeviceType) -> Result<()>;

    /// Toggle the vendor SDK's internal logging.
    fn set_log_enabled(&self, enabled: bool) -> Result<()>;

    /// Tag the SDK with the calling framework's name and version.
    fn set_wrapper_type(&self, kind: &str, version: &str) -> Result<()>;
}

/// Custom event recording.
pub trait EventTracking {
    /// Record a named event, optionally with a property map.
    fn record_event(
        &self,
        ctx: &HostContext,
        name: &str,
        properties: Option<&Map<String, Value>>,
    ) -> Result<()>;
}

/// Page-view tracking.
pub trait PageTracking {
    /// Switch between automatic and manual page-view collection.
    fn set_page_mode(&self, mode: PageMode) -> Result<()>;

    /// Mark the start of a manually tracked page view.
    fn page_start(&self, name: &str) -> Result<()>;

    /// Mark the end of a manually tracked page view.
    fn page_end(&self, name: &str) -> Result<()>;
}

/// User identity association.
pub trait UserIdentity {
    /// Associate subsequent events with the given user id.
    fn profile_sign_in(&self, user_id: &str) -> Result<()>;

    /// Clear the user identity association.
    fn profile_sign_off(&self) -> Result<()>;
}

/// Non-fatal error reporting.
pub trait ErrorReporting {
    /// Report a non-fatal error description to the vendor backend.
    fn report_error(&self, ctx: &HostContext, description: &str) -> Result<()>;
}
