// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]

use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use scorm_rt::{BridgeOptions, NullHooks, RuntimeBridge};

// Drives random call sequences against a tiny reference model and checks the
// core contract from the SCORM side: LMSGetLastError immediately after any
// call reflects that call's outcome, never a stale earlier error.
//
// The seed is pinned so failures reproduce across machines and CI.

#[derive(Debug, Clone)]
enum Call {
    Initialize,
    Finish,
    Get(&'static str),
    Set(&'static str, String),
    Commit,
}

/// Elements exercised by the generator, covering every access mode plus the
/// empty-name and unknown-name argument errors.
const ELEMENTS: &[&str] = &[
    "cmi.core.lesson_location",
    "cmi.core.lesson_status",
    "cmi.core.score.raw",
    "cmi.suspend_data",
    "cmi.core.student_id",
    "cmi.core.credit",
    "cmi.core._children",
    "cmi.core.session_time",
    "cmi.nonexistent.element",
    "",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModelPhase {
    NotInitialized,
    Running,
    Finished,
}

/// Expected error code after applying `call`, mirroring the documented
/// precondition table.
fn expected_code(phase: &mut ModelPhase, call: &Call) -> &'static str {
    match call {
        Call::Initialize => match *phase {
            ModelPhase::NotInitialized => {
                *phase = ModelPhase::Running;
                "0"
            }
            ModelPhase::Running | ModelPhase::Finished => "101",
        },
        Call::Finish => match *phase {
            ModelPhase::Running => {
                *phase = ModelPhase::Finished;
                "0"
            }
            ModelPhase::NotInitialized => "301",
            ModelPhase::Finished => "101",
        },
        Call::Commit => {
            if *phase == ModelPhase::Running {
                "0"
            } else {
                "301"
            }
        }
        Call::Get(element) => {
            if *phase != ModelPhase::Running {
                "301"
            } else if element.is_empty() {
                "201"
            } else if *element == "cmi.nonexistent.element" {
                "203"
            } else if *element == "cmi.core.session_time" {
                "404"
            } else {
                "0"
            }
        }
        Call::Set(element, _) => {
            if *phase != ModelPhase::Running {
                "301"
            } else if element.is_empty() {
                "201"
            } else if *element == "cmi.nonexistent.element" {
                "203"
            } else if matches!(
                *element,
                "cmi.core.student_id" | "cmi.core.credit" | "cmi.core._children"
            ) {
                "403"
            } else {
                "0"
            }
        }
    }
}

fn call_strategy() -> impl Strategy<Value = Call> {
    let element = prop::sample::select(ELEMENTS);
    prop_oneof![
        1 => Just(Call::Initialize),
        1 => Just(Call::Finish),
        1 => Just(Call::Commit),
        3 => element.clone().prop_map(Call::Get),
        3 => (element, "[a-z0-9 ]{0,12}").prop_map(|(e, v)| Call::Set(e, v)),
    ]
}

#[test]
fn proptest_seed_pinned_last_error_freshness() {
    const SEED_BYTES: [u8; 32] = [
        0x5c, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0,
    ];
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    let mut runner = TestRunner::new_with_rng(PropConfig::default(), rng);

    let sequence = prop::collection::vec(call_strategy(), 1..40);

    runner
        .run(&sequence, |calls| {
            let mut api = RuntimeBridge::new(BridgeOptions::default(), NullHooks);
            let mut phase = ModelPhase::NotInitialized;
            for call in &calls {
                let expected = expected_code(&mut phase, call);
                let sentinel_ok = match call {
                    Call::Initialize => api.initialize("") == "true",
                    Call::Finish => api.finish("") == "true",
                    Call::Commit => api.commit("") == "true",
                    Call::Get(element) => {
                        // A successful get may legitimately return "", so the
                        // sentinel alone is not decisive; the error code is.
                        let _ = api.get_value(element);
                        true
                    }
                    Call::Set(element, value) => api.set_value(element, value) == "true",
                };
                prop_assert_eq!(
                    api.last_error(),
                    expected,
                    "call {:?} left the wrong error",
                    call
                );
                if !matches!(call, Call::Get(_)) {
                    prop_assert_eq!(sentinel_ok, expected == "0", "sentinel/error mismatch");
                }
            }
            Ok(())
        })
        .unwrap();
}
