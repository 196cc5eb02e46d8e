// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The method channel binding the host framework to the adapter.
//
// One channel per process, name fixed by convention. The host delivers
// calls through `invoke`; the adapter registers itself as the handler on
// attach and clears the registration on detach.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::call::{MethodCall, MethodResponse};

/// Channel name fixed by the bridge contract.
pub const CHANNEL_NAME: &str = "messwerk_analytics";

/// Receiver side of the channel.
pub trait CallHandler: Send + Sync {
    /// Handle one call to completion and produce its response.
    fn on_call(&self, call: MethodCall) -> MethodResponse;
}

/// A named message channel with at most one registered handler.
pub struct MethodChannel {
    name: &'static str,
    handler: Mutex<Option<Arc<dyn CallHandler>>>,
}

impl MethodChannel {
    /// Channel under the conventional name.
    pub fn new() -> Self {
        Self::named(CHANNEL_NAME)
    }

    /// Channel under an explicit name (tests, embedders with their own
    /// naming scheme).
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            handler: Mutex::new(None),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Register the handler, replacing any previous registration.
    pub fn set_handler(&self, handler: Arc<dyn CallHandler>) {
        *self.lock() = Some(handler);
    }

    /// Remove the handler. Subsequent calls answer `NotImplemented`.
    pub fn clear_handler(&self) {
        *self.lock() = None;
    }

    /// Deliver one call to the registered handler.
    ///
    /// Each call is handled to completion before the response is returned;
    /// there is no queueing or overlap. An unregistered channel answers
    /// `NotImplemented` so a detached adapter degrades gracefully instead
    /// of crashing the host.
    pub fn invoke(&self, call: MethodCall) -> MethodResponse {
        let handler = self.lock().clone();
        match handler {
            Some(h) => h.on_call(call),
            None => {
                tracing::debug!(channel = self.name, method = %call.method, "no handler registered");
                MethodResponse::NotImplemented
            }
        }
    }

    // A panicked holder cannot leave an `Option<Arc>` half-written; recover
    // the guard rather than propagating the poison.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<dyn CallHandler>>> {
        self.handler.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MethodChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl CallHandler for Echo {
        fn on_call(&self, call: MethodCall) -> MethodResponse {
            MethodResponse::success_with(serde_json::Value::String(call.method))
        }
    }

    #[test]
    fn unregistered_channel_answers_not_implemented() {
        let channel = MethodChannel::new();
        let response = channel.invoke(MethodCall::new("getPlatformVersion"));
        assert_eq!(response, MethodResponse::NotImplemented);
    }

    #[test]
    fn registered_handler_receives_calls() {
        let channel = MethodChannel::new();
        channel.set_handler(Arc::new(Echo));
        let response = channel.invoke(MethodCall::new("ping"));
        assert_eq!(
            response,
            MethodResponse::success_with(serde_json::Value::String("ping".into()))
        );
    }

    #[test]
    fn cleared_handler_stops_receiving() {
        let channel = MethodChannel::new();
        channel.set_handler(Arc::new(Echo));
        channel.clear_handler();
        assert_eq!(
            channel.invoke(MethodCall::new("ping")),
            MethodResponse::NotImplemented
        );
    }
}
