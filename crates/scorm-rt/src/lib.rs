// SPDX-License-Identifier: Apache-2.0
//! scorm-rt: the SCORM 1.2 LMS run-time bridge.
//!
//! SCORM-packaged content discovers an `API` object and drives it through a
//! fixed eight-method surface (`LMSInitialize`, `LMSFinish`, `LMSGetValue`,
//! `LMSSetValue`, `LMSCommit`, `LMSGetLastError`, `LMSGetErrorString`,
//! `LMSGetDiagnostic`). This crate implements that surface over the CMI
//! store from `scorm-cmi`: one [`RuntimeBridge`] instance is one attempt,
//! owned by the host for exactly one content launch.
//!
//! Everything is synchronous and single-writer. Host notification happens
//! through the [`BridgeHooks`] seam, invoked before the triggering call
//! returns; any persistence the hooks kick off is the host's concern and
//! the bridge neither awaits nor retries it.

mod bridge;
mod error;
mod hooks;
mod session;

/// Owned copy of an attempt's CMI state, as delivered to hooks and hosts.
pub type AttemptSnapshot = std::collections::BTreeMap<String, String>;

pub use bridge::{BridgeOptions, RuntimeBridge};
pub use error::{error_string, ApiError, LastError};
pub use hooks::{BridgeHooks, NullHooks};
pub use session::Phase;
