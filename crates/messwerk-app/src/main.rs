// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Messwerk — demo host.
//
// Entry point. Initialises logging, wires a method channel to the adapter
// over a dev-mode vendor SDK, and drives the documented message sequence
// the way a real host application would: pre-init at startup, full init,
// then page/event/identity traffic.

mod console;

use std::sync::Arc;

use serde_json::json;

use messwerk_bridge::{Adapter, MethodCall, MethodChannel};
use messwerk_core::types::HostContext;

use console::ConsoleSdk;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Messwerk demo starting");

    let adapter = Arc::new(Adapter::new(Arc::new(ConsoleSdk)));
    let channel = MethodChannel::new();
    if let Err(e) = adapter.attach(&channel, HostContext::new(())) {
        tracing::error!(error = %e, "attach failed");
        return;
    }

    let script = [
        MethodCall::new("getPlatformVersion"),
        MethodCall::with_args(
            "preInit",
            json!({"appKey": "demo-app-key", "channel": "local"}),
        ),
        MethodCall::with_args("initCommon", json!(["demo-app-key", "", "local"])),
        MethodCall::new("setPageCollectionModeManual"),
        MethodCall::with_args("onPageStart", json!(["Home"])),
        MethodCall::with_args("onProfileSignIn", json!(["demo-user"])),
        MethodCall::with_args(
            "onEvent",
            json!(["purchase", {"sku": "espresso-450", "count": 1}]),
        ),
        MethodCall::with_args("onPageEnd", json!(["Home"])),
        MethodCall::with_args("reportError", json!(["demo non-fatal error"])),
        MethodCall::new("onProfileSignOff"),
        MethodCall::new("notARealMessage"),
    ];

    for call in script {
        let method = call.method.clone();
        let response = channel.invoke(call);
        tracing::info!(method = %method, ?response, "host received response");
    }

    adapter.detach(&channel);
    tracing::info!("Messwerk demo finished");
}
