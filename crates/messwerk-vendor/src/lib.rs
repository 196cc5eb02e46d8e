// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Messwerk — Vendor analytics SDK seam.
//
// This crate defines the traits through which the bridge invokes the
// closed-source vendor analytics SDK, plus one implementation per target:
// Android (JNI into the vendor's Java classes) and a stub for desktop/CI
// builds where the vendor library is not linked.

pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

use std::sync::Arc;

/// Retrieves the vendor SDK implementation for the target operating system.
///
/// RETURNS: A shared trait object (`dyn AnalyticsSdk`) that abstracts away
/// the underlying native SDK details.
pub fn analytics_sdk() -> Arc<dyn traits::AnalyticsSdk> {
    #[cfg(target_os = "android")]
    {
        // Android: invokes the vendor's static Java entry points via JNI.
        Arc::new(android::AndroidSdk::new())
    }
    #[cfg(not(target_os = "android"))]
    {
        // DESKTOP/CI: a no-op implementation so non-native builds link.
        Arc::new(stub::StubSdk)
    }
}
