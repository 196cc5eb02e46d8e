// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use serde::{Deserialize, Serialize};

/// Settings applied when the adapter attaches to a host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Enable the vendor SDK's internal logging at attach.
    pub vendor_log_enabled: bool,
    /// Wrapper tag identifying the calling framework to the vendor.
    pub wrapper_type: String,
    /// Version reported alongside the wrapper tag.
    pub wrapper_version: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            vendor_log_enabled: true,
            wrapper_type: "messwerk".to_string(),
            wrapper_version: "1.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_enables_vendor_logging() {
        let config = BridgeConfig::default();
        assert!(config.vendor_log_enabled);
        assert_eq!(config.wrapper_type, "messwerk");
    }
}
