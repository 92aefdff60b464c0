// SPDX-License-Identifier: Apache-2.0
//! The runtime bridge: SCORM call dispatch over one attempt's CMI store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use scorm_cmi::{CmiError, CmiStore};

use crate::error::{error_string, ApiError, LastError};
use crate::hooks::BridgeHooks;
use crate::session::Phase;
use crate::AttemptSnapshot;

/// Fixed identity elements, the only read-only fields a host ever rewrites.
const STUDENT_ID: &str = "cmi.core.student_id";
const STUDENT_NAME: &str = "cmi.core.student_name";

/// Construction-time options for a bridge instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeOptions {
    /// Partial snapshot merged over the schema defaults, used to resume an
    /// in-progress attempt. Unknown keys are skipped.
    #[serde(default)]
    pub saved_data: BTreeMap<String, String>,
    /// Pre-populates `cmi.core.student_id`.
    #[serde(default)]
    pub student_id: Option<String>,
    /// Pre-populates `cmi.core.student_name`.
    #[serde(default)]
    pub student_name: Option<String>,
}

/// One attempt's SCORM 1.2 run-time API.
///
/// The host owns the instance for exactly one content launch: create it
/// before the SCO loads, expose it at the SCORM discovery point, tear it
/// down after unload. The SCORM-facing methods return the spec's string
/// sentinels and record a queryable last error; they never panic or return
/// `Err` across the content boundary.
#[derive(Debug)]
pub struct RuntimeBridge<H: BridgeHooks> {
    store: CmiStore,
    phase: Phase,
    last_error: LastError,
    hooks: H,
    student_id: Option<String>,
    student_name: Option<String>,
}

impl<H: BridgeHooks> RuntimeBridge<H> {
    /// Builds a bridge. Never fails and performs no I/O: `saved_data` is
    /// merged over the schema defaults and the identity fields are
    /// pre-populated, all in memory.
    #[must_use]
    pub fn new(options: BridgeOptions, hooks: H) -> Self {
        let mut bridge = Self {
            store: CmiStore::new(),
            phase: Phase::default(),
            last_error: LastError::default(),
            hooks,
            student_id: options.student_id,
            student_name: options.student_name,
        };
        bridge
            .store
            .merge(options.saved_data.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        bridge.apply_student_info();
        bridge
    }

    // ── SCORM 1.2 call surface ──────────────────────────────────────

    /// `LMSInitialize`. The parameter is ignored per spec.
    pub fn initialize(&mut self, _param: &str) -> &'static str {
        match self.phase.begin() {
            Ok(()) => {
                debug!("LMSInitialize");
                self.last_error.clear();
                self.hooks.on_initialize();
                "true"
            }
            Err(err) => self.fail(err, "LMSInitialize: session already initialized or finished"),
        }
    }

    /// `LMSFinish`. Flips the session to its terminal phase and hands the
    /// final snapshot to the host.
    pub fn finish(&mut self, _param: &str) -> &'static str {
        match self.phase.end() {
            Ok(()) => {
                debug!("LMSFinish");
                self.last_error.clear();
                let snapshot = self.store.snapshot();
                self.hooks.on_finish(&snapshot);
                "true"
            }
            Err(err) => self.fail(err, "LMSFinish: session not running"),
        }
    }

    /// `LMSGetValue`. Returns the stored string, or `""` with the last
    /// error set.
    pub fn get_value(&mut self, element: &str) -> String {
        if self.phase.require_running().is_err() {
            self.fail(
                ApiError::NotInitialized,
                format!("LMSGetValue({element}): session not running"),
            );
            return String::new();
        }
        if element.is_empty() {
            self.fail(ApiError::InvalidArgument, "LMSGetValue: empty element name");
            return String::new();
        }
        match self.store.get(element) {
            Ok(value) => {
                debug!(element, "LMSGetValue");
                self.last_error.clear();
                value.to_string()
            }
            Err(err) => {
                let diagnostic = format!("LMSGetValue: {err}");
                self.fail(Self::map_cmi_error(&err), diagnostic);
                String::new()
            }
        }
    }

    /// `LMSSetValue`. Stores the value verbatim — no enumeration or format
    /// validation, matching how permissive deployed LMSes are.
    pub fn set_value(&mut self, element: &str, value: &str) -> &'static str {
        if self.phase.require_running().is_err() {
            return self.fail(
                ApiError::NotInitialized,
                format!("LMSSetValue({element}): session not running"),
            );
        }
        if element.is_empty() {
            return self.fail(ApiError::InvalidArgument, "LMSSetValue: empty element name");
        }
        match self.store.set(element, value) {
            Ok(()) => {
                debug!(element, value, "LMSSetValue");
                self.last_error.clear();
                self.hooks.on_set_value(element, value);
                "true"
            }
            Err(err) => {
                let diagnostic = format!("LMSSetValue: {err}");
                self.fail(Self::map_cmi_error(&err), diagnostic)
            }
        }
    }

    /// `LMSCommit`. Hands the current snapshot to the host; whether the
    /// host's persistence succeeds is invisible to the bridge.
    pub fn commit(&mut self, _param: &str) -> &'static str {
        if self.phase.require_running().is_err() {
            return self.fail(ApiError::NotInitialized, "LMSCommit: session not running");
        }
        debug!("LMSCommit");
        self.last_error.clear();
        let snapshot = self.store.snapshot();
        self.hooks.on_commit(&snapshot);
        "true"
    }

    /// `LMSGetLastError`. Reflects the most recent fallible call; read-only.
    #[must_use]
    pub fn last_error(&self) -> &'static str {
        self.last_error.error.code()
    }

    /// `LMSGetErrorString`. Static table lookup; does not touch error state.
    #[must_use]
    pub fn error_string(&self, code: &str) -> &'static str {
        error_string(code)
    }

    /// `LMSGetDiagnostic`. The diagnostic attached at the most recent
    /// failure site if one is set, else the fixed string for the queried
    /// code.
    #[must_use]
    pub fn diagnostic(&self, code: &str) -> String {
        self.last_error
            .diagnostic
            .clone()
            .unwrap_or_else(|| error_string(code).to_string())
    }

    // ── Host-facing utilities (not part of the SCORM surface) ───────

    /// Merges a partial snapshot over current state; the resume path,
    /// intended to run once before `LMSInitialize`. Unknown keys are
    /// skipped.
    pub fn load_data<'a, I>(&mut self, partial: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.store.merge(partial);
    }

    /// Owned copy of the attempt's state; mutating it does not touch the
    /// bridge.
    #[must_use]
    pub fn get_data(&self) -> AttemptSnapshot {
        self.store.snapshot()
    }

    /// Restores schema defaults, session phase, and last-error to a fresh
    /// attempt, then re-applies the construction-time student identity.
    /// Saved data from a previous attempt is not re-merged; resuming again
    /// requires a new `load_data` call.
    pub fn reset(&mut self) {
        self.store.reset();
        self.phase = Phase::default();
        self.last_error.clear();
        self.apply_student_info();
    }

    /// Writes the two read-only identity elements. This is the only
    /// sanctioned post-construction write to them.
    pub fn set_student_info(&mut self, id: &str, name: &str) {
        self.student_id = Some(id.to_string());
        self.student_name = Some(name.to_string());
        self.apply_student_info();
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Borrows the host hooks (test and host introspection).
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    // ── internals ───────────────────────────────────────────────────

    fn apply_student_info(&mut self) {
        // Identity elements are in the fixed schema; these writes cannot fail.
        if let Some(id) = self.student_id.clone() {
            let _ = self.store.put_unchecked(STUDENT_ID, &id);
        }
        if let Some(name) = self.student_name.clone() {
            let _ = self.store.put_unchecked(STUDENT_NAME, &name);
        }
    }

    /// Records the failure, then returns the SCORM failure sentinel. The
    /// order matters: content polls `LMSGetLastError` right after seeing
    /// `"false"`.
    fn fail(&mut self, error: ApiError, diagnostic: impl Into<String>) -> &'static str {
        let diagnostic = diagnostic.into();
        warn!(code = error.code(), %diagnostic, "SCORM call failed");
        self.last_error.fail(error, diagnostic);
        "false"
    }

    fn map_cmi_error(err: &CmiError) -> ApiError {
        match err {
            CmiError::UnknownElement { .. } => ApiError::NotAnArray,
            CmiError::ReadOnly { .. } => ApiError::ReadOnlyElement,
            CmiError::WriteOnly { .. } => ApiError::WriteOnlyElement,
        }
    }
}
