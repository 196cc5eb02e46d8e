// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The SDK adapter: lifecycle, capability bookkeeping, and the dispatch
// table mapping message names to vendor SDK entry points.
//
// Dispatch is synchronous request/response. A host runtime may still be
// multi-threaded, so the mutable pieces (host context, probed
// capabilities) sit behind one mutex; vendor calls run outside the
// critical section.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::{debug, info, warn};

use messwerk_core::config::BridgeConfig;
use messwerk_core::error::{MesswerkError, Result};
use messwerk_core::types::{DeviceType, HostContext, SdkCapabilities};
use messwerk_vendor::traits::AnalyticsSdk;

use crate::call::{MethodCall, MethodResponse};
use crate::channel::{CallHandler, MethodChannel};
use crate::request::{DecodeError, Request};

#[derive(Default)]
struct AdapterState {
    /// Present between attach and detach. Calls that need platform
    /// services no-op while this is `None`.
    context: Option<HostContext>,
    /// Result of the capability probe; advisory only.
    capabilities: SdkCapabilities,
}

/// The bridge component translating framework messages into vendor calls.
///
/// Lifecycle: `unattached → attached → (any number of dispatch calls) →
/// detached`, and back to `attached` via a fresh [`Adapter::attach`].
pub struct Adapter {
    vendor: Arc<dyn AnalyticsSdk>,
    config: BridgeConfig,
    state: Mutex<AdapterState>,
}

impl Adapter {
    pub fn new(vendor: Arc<dyn AnalyticsSdk>) -> Self {
        Self::with_config(vendor, BridgeConfig::default())
    }

    pub fn with_config(vendor: Arc<dyn AnalyticsSdk>, config: BridgeConfig) -> Self {
        Self {
            vendor,
            config,
            state: Mutex::new(AdapterState::default()),
        }
    }

    /// Bind to the host: store the context, register on the channel, then
    /// run attach-time housekeeping (vendor logging, capability probe,
    /// wrapper tag). Housekeeping is best-effort — failures are logged and
    /// never abort the attach.
    ///
    /// Errors with [`MesswerkError::AlreadyAttached`] if called twice
    /// without a matching [`Adapter::detach`].
    pub fn attach(
        self: &Arc<Self>,
        channel: &MethodChannel,
        context: HostContext,
    ) -> Result<()> {
        {
            let mut state = self.state();
            if state.context.is_some() {
                return Err(MesswerkError::AlreadyAttached);
            }
            state.context = Some(context);
        }
        channel.set_handler(self.clone());

        if self.config.vendor_log_enabled {
            if let Err(e) = self.vendor.set_log_enabled(true) {
                debug!(error = %e, "vendor logging not enabled");
            }
        }
        self.probe_capabilities();
        match self
            .vendor
            .set_wrapper_type(&self.config.wrapper_type, &self.config.wrapper_version)
        {
            Ok(()) => info!(
                wrapper = %self.config.wrapper_type,
                version = %self.config.wrapper_version,
                "wrapper tag applied"
            ),
            Err(e) => debug!(error = %e, "wrapper tag not applied"),
        }

        info!(channel = channel.name(), "adapter attached");
        Ok(())
    }

    /// Unbind from the host: clear the channel registration and release
    /// the context. Idempotent; subsequent channel calls answer
    /// `NotImplemented` and direct dispatch no-ops gracefully.
    pub fn detach(&self, channel: &MethodChannel) {
        channel.clear_handler();
        self.state().context = None;
        info!(channel = channel.name(), "adapter detached");
    }

    pub fn is_attached(&self) -> bool {
        self.state().context.is_some()
    }

    /// Ask the vendor build what it supports. Failures are treated as
    /// "capabilities unknown" — logged, recorded as unsupported, and never
    /// propagated to the caller.
    fn probe_capabilities(&self) {
        let capabilities = match self.vendor.capabilities() {
            Ok(caps) => {
                if caps.structured_events {
                    info!(sdk_version = ?caps.sdk_version, "vendor SDK capability check passed");
                } else {
                    warn!("vendor SDK build lacks structured events; update the linked SDK");
                }
                caps
            }
            Err(e) => {
                warn!(error = %e, "vendor SDK capability probe failed");
                SdkCapabilities::default()
            }
        };
        self.state().capabilities = capabilities;
    }

    /// Handle one call to completion.
    ///
    /// Unknown names answer `NotImplemented`; malformed required fields
    /// are logged and answered with an empty success, invoking nothing —
    /// the wire contract treats them as no-ops. Everything else reaches
    /// exactly one vendor entry point, and any vendor error is converted
    /// to the generic error response at this single point.
    pub fn handle(&self, call: &MethodCall) -> MethodResponse {
        let (context, structured_events) = {
            let state = self.state();
            (state.context.clone(), state.capabilities.structured_events)
        };
        if !structured_events {
            // Advisory only; the call still proceeds.
            warn!(method = %call.method, "dispatching against a vendor build without structured events");
        }

        let request = match Request::decode(call) {
            Ok(request) => request,
            Err(DecodeError::UnknownMethod(method)) => {
                debug!(method = %method, "unrecognized method");
                return MethodResponse::NotImplemented;
            }
            Err(e) => {
                warn!(method = %call.method, error = %e, "malformed arguments; call ignored");
                return MethodResponse::success();
            }
        };

        match self.dispatch(request, context.as_ref()) {
            Ok(payload) => MethodResponse::Success { payload },
            Err(e) => {
                warn!(method = %call.method, error = %e, "vendor call failed");
                MethodResponse::error(e.to_string())
            }
        }
    }

    fn dispatch(&self, request: Request, context: Option<&HostContext>) -> Result<Option<Value>> {
        match request {
            Request::PlatformVersion => {
                let version = format!(
                    "{} {}",
                    self.vendor.platform_name(),
                    self.vendor.platform_version()
                );
                Ok(Some(Value::String(version)))
            }
            Request::PreInit(identity) => self.gated(context, "preInit", |ctx| {
                self.vendor.pre_init(ctx, &identity)
            }),
            Request::InitCommon(identity) => self.gated(context, "initCommon", |ctx| {
                self.vendor.init(ctx, &identity, DeviceType::Phone)
            }),
            Request::Event { name, properties } => self.gated(context, "onEvent", |ctx| {
                self.vendor.record_event(ctx, &name, properties.as_ref())
            }),
            Request::ProfileSignIn { user_id } => {
                self.gated(context, "onProfileSignIn", |_ctx| {
                    info!(user_id = %user_id, "profile sign-in");
                    self.vendor.profile_sign_in(&user_id)
                })
            }
            Request::ProfileSignOff => {
                info!("profile sign-off");
                self.vendor.profile_sign_off()?;
                Ok(None)
            }
            Request::SetPageMode(mode) => {
                self.vendor.set_page_mode(mode)?;
                Ok(None)
            }
            Request::PageStart { page } => {
                info!(page = %page, "page start");
                self.vendor.page_start(&page)?;
                Ok(None)
            }
            Request::PageEnd { page } => {
                info!(page = %page, "page end");
                self.vendor.page_end(&page)?;
                Ok(None)
            }
            Request::ReportError { description } => {
                self.gated(context, "reportError", |ctx| {
                    self.vendor.report_error(ctx, &description)
                })
            }
        }
    }

    /// Run a context-dependent vendor call, or no-op when no host context
    /// is attached. The no-op completes successfully — the contract keeps
    /// early or late calls harmless rather than surfacing them as errors.
    fn gated(
        &self,
        context: Option<&HostContext>,
        method: &'static str,
        f: impl FnOnce(&HostContext) -> Result<()>,
    ) -> Result<Option<Value>> {
        match context {
            Some(ctx) => {
                f(ctx)?;
                Ok(None)
            }
            None => {
                warn!(method, "no host context attached; call ignored");
                Ok(None)
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, AdapterState> {
        // A panicked holder cannot leave this state half-written; recover
        // the guard rather than propagating the poison.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CallHandler for Adapter {
    fn on_call(&self, call: MethodCall) -> MethodResponse {
        self.handle(&call)
    }
}
