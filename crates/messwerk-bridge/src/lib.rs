// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Messwerk — Message-channel adapter for the vendor analytics SDK.
//
// The adapter receives named calls from the application framework over a
// method channel, decodes them into typed requests at the boundary, and
// forwards each to exactly one vendor SDK entry point. Message names and
// argument shapes are fixed by the existing bridge contract and preserved
// verbatim for compatibility.

pub mod adapter;
pub mod call;
pub mod channel;
pub mod request;

pub use adapter::Adapter;
pub use call::{ERROR_CODE, MethodCall, MethodResponse};
pub use channel::{CHANNEL_NAME, CallHandler, MethodChannel};
pub use request::{DecodeError, Request};
