// SPDX-License-Identifier: Apache-2.0
//! Host notification seam.

use crate::AttemptSnapshot;

/// Observer the host supplies to learn about attempt state changes.
///
/// All methods are invoked synchronously, before the triggering SCORM call
/// returns, and default to no-ops. Hooks must not call back into the bridge;
/// there is exactly one writer and it is mid-call when a hook runs.
pub trait BridgeHooks {
    /// `LMSInitialize` succeeded.
    fn on_initialize(&mut self) {}

    /// `LMSFinish` succeeded; `snapshot` is the attempt's final state.
    /// Persisting it (and surfacing persistence failures) is the host's job.
    fn on_finish(&mut self, snapshot: &AttemptSnapshot) {
        let _ = snapshot;
    }

    /// `LMSSetValue` stored a value.
    fn on_set_value(&mut self, element: &str, value: &str) {
        let _ = (element, value);
    }

    /// `LMSCommit` was called; `snapshot` is the current state.
    fn on_commit(&mut self, snapshot: &AttemptSnapshot) {
        let _ = snapshot;
    }
}

/// Hooks that ignore every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHooks;

impl BridgeHooks for NullHooks {}
