// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Messwerk.

use thiserror::Error;

/// Top-level error type for all Messwerk operations.
#[derive(Debug, Error)]
pub enum MesswerkError {
    // -- Vendor SDK --
    #[error("vendor SDK call failed: {0}")]
    Vendor(String),

    #[error("vendor SDK not linked on this platform")]
    PlatformUnavailable,

    // -- Bridge plumbing --
    #[error("bridge error: {0}")]
    Bridge(String),

    #[error("adapter is already attached")]
    AlreadyAttached,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MesswerkError>;
