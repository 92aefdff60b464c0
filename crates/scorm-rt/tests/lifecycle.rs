// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]

use scorm_rt::{BridgeOptions, NullHooks, RuntimeBridge};

fn bridge() -> RuntimeBridge<NullHooks> {
    RuntimeBridge::new(BridgeOptions::default(), NullHooks)
}

#[test]
fn double_initialize_fails_with_101() {
    let mut api = bridge();
    assert_eq!(api.initialize(""), "true");
    assert_eq!(api.last_error(), "0");
    assert_eq!(api.initialize(""), "false");
    assert_eq!(api.last_error(), "101");
}

#[test]
fn data_calls_before_initialize_fail_with_301() {
    let mut api = bridge();
    assert_eq!(api.get_value("cmi.core.lesson_status"), "");
    assert_eq!(api.last_error(), "301");
    assert_eq!(api.set_value("cmi.core.lesson_location", "page1"), "false");
    assert_eq!(api.last_error(), "301");
    assert_eq!(api.commit(""), "false");
    assert_eq!(api.last_error(), "301");
}

#[test]
fn finish_before_initialize_fails_with_301() {
    let mut api = bridge();
    assert_eq!(api.finish(""), "false");
    assert_eq!(api.last_error(), "301");
}

#[test]
fn finished_session_is_terminal() {
    let mut api = bridge();
    api.initialize("");
    assert_eq!(api.finish(""), "true");

    // No re-initialize, no double finish, no data access.
    assert_eq!(api.initialize(""), "false");
    assert_eq!(api.last_error(), "101");
    assert_eq!(api.finish(""), "false");
    assert_eq!(api.last_error(), "101");
    assert_eq!(api.set_value("cmi.core.lesson_status", "completed"), "false");
    assert_eq!(api.last_error(), "301");
    assert_eq!(api.get_value("cmi.core.lesson_status"), "");
    assert_eq!(api.last_error(), "301");
}

#[test]
fn errors_do_not_wedge_the_session() {
    let mut api = bridge();
    api.initialize("");
    assert_eq!(api.set_value("cmi.core.credit", "no-credit"), "false");
    assert_eq!(api.last_error(), "403");
    // The session keeps working after a failed call.
    assert_eq!(api.set_value("cmi.core.lesson_location", "page3"), "true");
    assert_eq!(api.get_value("cmi.core.lesson_location"), "page3");
    assert_eq!(api.last_error(), "0");
    assert_eq!(api.commit(""), "true");
    assert_eq!(api.finish(""), "true");
}

#[test]
fn reset_allows_a_fresh_attempt_after_finish() {
    let mut api = bridge();
    api.initialize("");
    api.set_value("cmi.core.lesson_status", "completed");
    api.finish("");

    api.reset();
    assert_eq!(api.initialize(""), "true");
    assert_eq!(api.get_value("cmi.core.lesson_status"), "not attempted");
}

#[test]
fn unknown_element_fails_with_203() {
    let mut api = bridge();
    api.initialize("");
    assert_eq!(api.get_value("cmi.nonexistent.element"), "");
    assert_eq!(api.last_error(), "203");
    assert_eq!(api.set_value("cmi.nonexistent.element", "x"), "false");
    assert_eq!(api.last_error(), "203");
}

#[test]
fn read_only_elements_reject_content_writes() {
    let mut api = bridge();
    api.initialize("");
    for element in [
        "cmi.core._children",
        "cmi.core.student_id",
        "cmi.core.student_name",
        "cmi.core.credit",
        "cmi.core.entry",
        "cmi.core.total_time",
        "cmi.core.lesson_mode",
        "cmi.launch_data",
        "cmi.comments_from_lms",
        "cmi.objectives._count",
        "cmi.student_data._children",
        "cmi.student_preference._children",
        "cmi.interactions._count",
    ] {
        assert_eq!(api.set_value(element, "x"), "false", "{element}");
        assert_eq!(api.last_error(), "403", "{element}");
    }
}

#[test]
fn lesson_status_is_stored_without_enum_validation() {
    // Deliberate looseness: non-conformant statuses are stored verbatim.
    let mut api = bridge();
    api.initialize("");
    assert_eq!(api.set_value("cmi.core.lesson_status", "finished!!"), "true");
    assert_eq!(api.get_value("cmi.core.lesson_status"), "finished!!");
}

#[test]
fn error_string_matches_the_fixed_table() {
    let api = bridge();
    assert_eq!(api.error_string("0"), "No error");
    assert_eq!(api.error_string("101"), "General exception");
    assert_eq!(api.error_string("201"), "Invalid argument error");
    assert_eq!(api.error_string("202"), "Element cannot have children");
    assert_eq!(api.error_string("203"), "Element not an array - cannot have count");
    assert_eq!(api.error_string("301"), "Not initialized");
    assert_eq!(api.error_string("401"), "Not implemented error");
    assert_eq!(api.error_string("402"), "Invalid set value, element is a keyword");
    assert_eq!(api.error_string("403"), "Element is read only");
    assert_eq!(api.error_string("404"), "Element is write only");
    assert_eq!(api.error_string("405"), "Incorrect data type");
    assert_eq!(api.error_string("1234"), "Unknown error");
}
