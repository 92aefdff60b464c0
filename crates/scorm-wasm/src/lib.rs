// SPDX-License-Identifier: Apache-2.0
//! wasm-bindgen bindings for the SCORM runtime bridge.
//!
//! SCORM 1.2 content discovers its LMS by walking the frame hierarchy for a
//! global named `API` and calling the eight `LMS*` methods on it. This crate
//! exports [`ScormApi`], a class whose method names are the verbatim SCORM
//! names, and [`install`]/[`uninstall`] functions that bound the global's
//! lifetime to one content launch — leaving a stale `window.API` behind
//! would hand a finished session to the next package.
//!
//! All values crossing the boundary are JS strings, per the SCORM data
//! model. Host callbacks (`onInitialize`, `onFinish`, `onSetValue`,
//! `onCommit`) are invoked synchronously before the triggering call
//! returns; snapshots arrive as plain JS objects.

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use scorm_rt::{AttemptSnapshot, BridgeHooks, BridgeOptions, RuntimeBridge};

/// Global property name mandated by SCORM 1.2 for API discovery.
pub const API_GLOBAL_NAME: &str = "API";

#[cfg(feature = "console-panic")]
#[wasm_bindgen(start)]
/// Initialize console panic hook for better error messages in browser.
pub fn init_console_panic_hook() {
    console_error_panic_hook::set_once();
}

// -------------------------------------------------------------------------
// Host callbacks
// -------------------------------------------------------------------------

/// Bridge hooks that forward to optional JS callbacks.
///
/// Callback exceptions are swallowed: a throwing host callback must not turn
/// a successful SCORM call into a failure the content can observe.
#[derive(Default)]
struct JsHooks {
    on_initialize: Option<Function>,
    on_finish: Option<Function>,
    on_set_value: Option<Function>,
    on_commit: Option<Function>,
}

impl JsHooks {
    fn from_options(options: &JsValue) -> Self {
        Self {
            on_initialize: get_function(options, "onInitialize"),
            on_finish: get_function(options, "onFinish"),
            on_set_value: get_function(options, "onSetValue"),
            on_commit: get_function(options, "onCommit"),
        }
    }
}

impl BridgeHooks for JsHooks {
    fn on_initialize(&mut self) {
        if let Some(f) = &self.on_initialize {
            if let Err(err) = f.call0(&JsValue::NULL) {
                report_callback_error("onInitialize", &err);
            }
        }
    }

    fn on_finish(&mut self, snapshot: &AttemptSnapshot) {
        if let Some(f) = &self.on_finish {
            if let Err(err) = f.call1(&JsValue::NULL, &snapshot_to_js(snapshot)) {
                report_callback_error("onFinish", &err);
            }
        }
    }

    fn on_set_value(&mut self, element: &str, value: &str) {
        if let Some(f) = &self.on_set_value {
            if let Err(err) = f.call2(
                &JsValue::NULL,
                &JsValue::from_str(element),
                &JsValue::from_str(value),
            ) {
                report_callback_error("onSetValue", &err);
            }
        }
    }

    fn on_commit(&mut self, snapshot: &AttemptSnapshot) {
        if let Some(f) = &self.on_commit {
            if let Err(err) = f.call1(&JsValue::NULL, &snapshot_to_js(snapshot)) {
                report_callback_error("onCommit", &err);
            }
        }
    }
}

/// Surfaces a throwing host callback on the browser console. The exception
/// never reaches content: a throwing callback must not turn a successful
/// SCORM call into a failure the SCO can observe.
fn report_callback_error(name: &str, err: &JsValue) {
    #[cfg(feature = "console-panic")]
    web_sys::console::error_2(&format!("scorm-wasm: {name} callback threw").into(), err);
    #[cfg(not(feature = "console-panic"))]
    let _ = (name, err);
}

fn get_function(options: &JsValue, key: &str) -> Option<Function> {
    Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
}

fn snapshot_to_js(snapshot: &AttemptSnapshot) -> JsValue {
    serde_wasm_bindgen::to_value(snapshot).unwrap_or(JsValue::NULL)
}

// -------------------------------------------------------------------------
// The API object
// -------------------------------------------------------------------------

/// The SCORM 1.2 `window.API` object for one content launch.
#[wasm_bindgen]
pub struct ScormApi {
    bridge: RuntimeBridge<JsHooks>,
}

#[wasm_bindgen]
impl ScormApi {
    /// Builds the API object from an options bag:
    ///
    /// * `savedData` — partial `element -> value` map to resume an attempt
    /// * `studentId` / `studentName` — read-only identity fields
    /// * `onInitialize` / `onFinish` / `onSetValue` / `onCommit` — callbacks
    ///
    /// Construction always succeeds and performs no I/O. A malformed
    /// `savedData` bag is dropped (the attempt starts from schema defaults)
    /// and reported on the console under the `console-panic` feature.
    #[wasm_bindgen(constructor)]
    pub fn new(options: &JsValue) -> ScormApi {
        let hooks = JsHooks::from_options(options);
        let mut bridge_options = BridgeOptions::default();

        let saved = Reflect::get(options, &JsValue::from_str("savedData")).unwrap_or(JsValue::UNDEFINED);
        if !saved.is_undefined() && !saved.is_null() {
            match serde_wasm_bindgen::from_value(saved) {
                Ok(map) => bridge_options.saved_data = map,
                Err(_err) => {
                    #[cfg(feature = "console-panic")]
                    web_sys::console::error_1(
                        &format!("scorm-wasm: ignoring malformed savedData: {_err}").into(),
                    );
                }
            }
        }
        bridge_options.student_id = get_string(options, "studentId");
        bridge_options.student_name = get_string(options, "studentName");

        Self {
            bridge: RuntimeBridge::new(bridge_options, hooks),
        }
    }

    // ── SCORM 1.2 call surface (names fixed by the spec) ────────────

    /// `LMSInitialize("")` — begins the attempt.
    #[wasm_bindgen(js_name = "LMSInitialize")]
    pub fn lms_initialize(&mut self, param: &str) -> String {
        self.bridge.initialize(param).to_string()
    }

    /// `LMSFinish("")` — ends the attempt; terminal.
    #[wasm_bindgen(js_name = "LMSFinish")]
    pub fn lms_finish(&mut self, param: &str) -> String {
        self.bridge.finish(param).to_string()
    }

    /// `LMSGetValue(element)` — stored string, or `""` with the error set.
    #[wasm_bindgen(js_name = "LMSGetValue")]
    pub fn lms_get_value(&mut self, element: &str) -> String {
        self.bridge.get_value(element)
    }

    /// `LMSSetValue(element, value)` — stores the value verbatim.
    #[wasm_bindgen(js_name = "LMSSetValue")]
    pub fn lms_set_value(&mut self, element: &str, value: &str) -> String {
        self.bridge.set_value(element, value).to_string()
    }

    /// `LMSCommit("")` — hands the current snapshot to the host.
    #[wasm_bindgen(js_name = "LMSCommit")]
    pub fn lms_commit(&mut self, param: &str) -> String {
        self.bridge.commit(param).to_string()
    }

    /// `LMSGetLastError()` — decimal code of the most recent outcome.
    #[wasm_bindgen(js_name = "LMSGetLastError")]
    pub fn lms_get_last_error(&self) -> String {
        self.bridge.last_error().to_string()
    }

    /// `LMSGetErrorString(code)` — fixed table lookup.
    #[wasm_bindgen(js_name = "LMSGetErrorString")]
    pub fn lms_get_error_string(&self, code: &str) -> String {
        self.bridge.error_string(code).to_string()
    }

    /// `LMSGetDiagnostic(code)` — diagnostic text, falling back to the
    /// fixed error string.
    #[wasm_bindgen(js_name = "LMSGetDiagnostic")]
    pub fn lms_get_diagnostic(&self, code: &str) -> String {
        self.bridge.diagnostic(code)
    }

    // ── Host-facing utilities ───────────────────────────────────────

    /// Merges a partial snapshot over the attempt (resume path; call before
    /// `LMSInitialize`).
    #[wasm_bindgen(js_name = "loadData")]
    pub fn load_data(&mut self, partial: JsValue) -> Result<(), JsValue> {
        let partial: AttemptSnapshot = serde_wasm_bindgen::from_value(partial)
            .map_err(|e| JsValue::from_str(&format!("loadData: {e}")))?;
        self.bridge
            .load_data(partial.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        Ok(())
    }

    /// Owned copy of the attempt state as a plain JS object.
    #[wasm_bindgen(js_name = "getData")]
    pub fn get_data(&self) -> JsValue {
        snapshot_to_js(&self.bridge.get_data())
    }

    /// Restores schema defaults and the lifecycle to a fresh attempt,
    /// keeping the construction-time student identity.
    pub fn reset(&mut self) {
        self.bridge.reset();
    }

    /// Writes the two read-only identity fields (the only sanctioned way).
    #[wasm_bindgen(js_name = "setStudentInfo")]
    pub fn set_student_info(&mut self, id: &str, name: &str) {
        self.bridge.set_student_info(id, name);
    }
}

fn get_string(options: &JsValue, key: &str) -> Option<String> {
    Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

// -------------------------------------------------------------------------
// Global binding (window.API lifecycle)
// -------------------------------------------------------------------------

/// Binds the API object at the SCORM discovery point (`window.API`).
///
/// Call before the SCO iframe executes its startup script. Consumes the
/// object: from here the global binding owns it until [`uninstall`].
#[wasm_bindgen]
pub fn install(api: ScormApi) -> Result<(), JsValue> {
    Reflect::set(
        &js_sys::global(),
        &JsValue::from_str(API_GLOBAL_NAME),
        &JsValue::from(api),
    )?;
    Ok(())
}

/// Removes the `window.API` binding after the SCO unloads.
///
/// Idempotent. Skipping this leaks a finished session into the next content
/// launch, which is exactly the stale-API bug the SCORM discovery walk is
/// prone to.
#[wasm_bindgen]
pub fn uninstall() -> Result<(), JsValue> {
    Reflect::delete_property(&js_sys::global(), &JsValue::from_str(API_GLOBAL_NAME))?;
    Ok(())
}

/// Folds a reported `cmi.core.session_time` into a running
/// `cmi.core.total_time` (host utility for between-attempt bookkeeping).
#[wasm_bindgen(js_name = "accumulateTotalTime")]
#[must_use]
pub fn accumulate_total_time(total: &str, session: &str) -> String {
    scorm_cmi::accumulate_total_time(total, session)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn construction_survives_malformed_saved_data() {
        let options = js_sys::Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("savedData"),
            &JsValue::from_str("not a map"),
        )
        .unwrap();
        let mut api = ScormApi::new(&options);
        // The bag is dropped; the attempt starts from schema defaults.
        assert_eq!(api.lms_initialize(""), "true");
        assert_eq!(api.lms_get_value("cmi.core.lesson_status"), "not attempted");
    }

    #[wasm_bindgen_test]
    fn construction_accepts_missing_options() {
        let mut api = ScormApi::new(&JsValue::UNDEFINED);
        assert_eq!(api.lms_initialize(""), "true");
    }

    #[wasm_bindgen_test]
    fn throwing_callback_does_not_fail_the_call() {
        let options = js_sys::Object::new();
        let thrower = js_sys::Function::new_no_args("throw new Error('boom')");
        Reflect::set(&options, &JsValue::from_str("onCommit"), &thrower).unwrap();
        let mut api = ScormApi::new(&options);
        api.lms_initialize("");
        assert_eq!(api.lms_commit(""), "true");
        assert_eq!(api.lms_get_last_error(), "0");
    }

    #[wasm_bindgen_test]
    fn install_then_uninstall_bounds_the_global() {
        let key = JsValue::from_str(API_GLOBAL_NAME);
        install(ScormApi::new(&JsValue::UNDEFINED)).unwrap();
        assert!(!Reflect::get(&js_sys::global(), &key).unwrap().is_undefined());
        uninstall().unwrap();
        assert!(Reflect::get(&js_sys::global(), &key).unwrap().is_undefined());
    }
}
