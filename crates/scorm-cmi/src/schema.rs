// SPDX-License-Identifier: Apache-2.0
//! The fixed SCORM 1.2 CMI element schema.
//!
//! The table below is the whole contract: `LMSSetValue` never creates a key
//! that is not in it, and access modes are enforced per element. Enumerated
//! value sets (e.g. `cmi.core.lesson_status` ranges over `not attempted`,
//! `incomplete`, `completed`, `passed`, `failed`, `browsed`) are documented
//! here but deliberately not validated on write; real-world content sends
//! non-conformant values and the runtime stores them verbatim.

use serde::{Deserialize, Serialize};

/// Access mode of a CMI element, as seen by content through
/// `LMSGetValue`/`LMSSetValue`. Host-side writes (`load_data`,
/// `set_student_info`) bypass the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Access {
    /// Readable by content, writable only by the host.
    ReadOnly,
    /// Writable by content, never readable back (`cmi.core.session_time`).
    WriteOnly,
    /// Readable and writable by content.
    ReadWrite,
}

/// One row of the CMI schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementDef {
    /// Dotted element name, e.g. `cmi.core.lesson_location`.
    pub name: &'static str,
    /// Access mode enforced on the content-facing call surface.
    pub access: Access,
    /// Value the element holds in a fresh attempt. Descriptor elements
    /// (`_children`, `_count`) carry their fixed descriptor string here.
    pub default: &'static str,
}

/// Fixed children descriptor for `cmi.core`.
const CORE_CHILDREN: &str = "student_id,student_name,lesson_location,credit,\
lesson_status,entry,score,total_time,lesson_mode,exit,session_time";

/// The SCORM 1.2 CMI core schema plus the optional elements this runtime
/// supports (`suspend_data`, `launch_data`, comments, objective/interaction
/// counts, `student_data.*`, `student_preference.*`).
pub const ELEMENTS: &[ElementDef] = &[
    ElementDef {
        name: "cmi.core._children",
        access: Access::ReadOnly,
        default: CORE_CHILDREN,
    },
    ElementDef {
        name: "cmi.core.student_id",
        access: Access::ReadOnly,
        default: "",
    },
    ElementDef {
        name: "cmi.core.student_name",
        access: Access::ReadOnly,
        default: "",
    },
    ElementDef {
        name: "cmi.core.lesson_location",
        access: Access::ReadWrite,
        default: "",
    },
    ElementDef {
        name: "cmi.core.credit",
        access: Access::ReadOnly,
        default: "credit",
    },
    // Enumerated: not attempted | incomplete | completed | passed | failed | browsed.
    ElementDef {
        name: "cmi.core.lesson_status",
        access: Access::ReadWrite,
        default: "not attempted",
    },
    ElementDef {
        name: "cmi.core.entry",
        access: Access::ReadOnly,
        default: "ab-initio",
    },
    ElementDef {
        name: "cmi.core.score._children",
        access: Access::ReadOnly,
        default: "raw,min,max",
    },
    ElementDef {
        name: "cmi.core.score.raw",
        access: Access::ReadWrite,
        default: "",
    },
    ElementDef {
        name: "cmi.core.score.min",
        access: Access::ReadWrite,
        default: "",
    },
    ElementDef {
        name: "cmi.core.score.max",
        access: Access::ReadWrite,
        default: "",
    },
    ElementDef {
        name: "cmi.core.total_time",
        access: Access::ReadOnly,
        default: "0000:00:00.00",
    },
    ElementDef {
        name: "cmi.core.lesson_mode",
        access: Access::ReadOnly,
        default: "normal",
    },
    // Strict SCORM marks `exit` write-only; kept read-write so content that
    // reads back what it wrote keeps working.
    ElementDef {
        name: "cmi.core.exit",
        access: Access::ReadWrite,
        default: "",
    },
    ElementDef {
        name: "cmi.core.session_time",
        access: Access::WriteOnly,
        default: "0000:00:00.00",
    },
    ElementDef {
        name: "cmi.suspend_data",
        access: Access::ReadWrite,
        default: "",
    },
    ElementDef {
        name: "cmi.launch_data",
        access: Access::ReadOnly,
        default: "",
    },
    ElementDef {
        name: "cmi.comments",
        access: Access::ReadWrite,
        default: "",
    },
    ElementDef {
        name: "cmi.comments_from_lms",
        access: Access::ReadOnly,
        default: "",
    },
    ElementDef {
        name: "cmi.objectives._count",
        access: Access::ReadOnly,
        default: "0",
    },
    ElementDef {
        name: "cmi.student_data._children",
        access: Access::ReadOnly,
        default: "mastery_score,max_time_allowed,time_limit_action",
    },
    ElementDef {
        name: "cmi.student_data.mastery_score",
        access: Access::ReadOnly,
        default: "",
    },
    ElementDef {
        name: "cmi.student_data.max_time_allowed",
        access: Access::ReadOnly,
        default: "",
    },
    ElementDef {
        name: "cmi.student_data.time_limit_action",
        access: Access::ReadOnly,
        default: "",
    },
    ElementDef {
        name: "cmi.student_preference._children",
        access: Access::ReadOnly,
        default: "audio,language,speed,text",
    },
    ElementDef {
        name: "cmi.student_preference.audio",
        access: Access::ReadWrite,
        default: "0",
    },
    ElementDef {
        name: "cmi.student_preference.language",
        access: Access::ReadWrite,
        default: "",
    },
    ElementDef {
        name: "cmi.student_preference.speed",
        access: Access::ReadWrite,
        default: "0",
    },
    ElementDef {
        name: "cmi.student_preference.text",
        access: Access::ReadWrite,
        default: "0",
    },
    ElementDef {
        name: "cmi.interactions._count",
        access: Access::ReadOnly,
        default: "0",
    },
];

/// Looks up an element definition by its dotted name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static ElementDef> {
    ELEMENTS.iter().find(|def| def.name == name)
}
