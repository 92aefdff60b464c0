// SPDX-License-Identifier: Apache-2.0
//! SCORM 1.2 CMI data model.
//!
//! The CMI ("Computer-Managed Instruction") model is a flat mapping from
//! dotted element names (`cmi.core.lesson_status`) to string values, with a
//! fixed schema of roughly 25 known elements. Each element carries an access
//! mode (read-only, write-only, read-write) and a default value; `_children`
//! and `_count` descriptor elements carry their fixed descriptor strings.
//!
//! This crate holds the schema table, the in-memory attempt store, and the
//! SCORM timespan format. The runtime call surface (the `LMS*` methods and
//! their error codes) lives in `scorm-rt`.

mod schema;
mod store;
mod timespan;

pub use schema::{lookup, Access, ElementDef, ELEMENTS};
pub use store::{CmiError, CmiStore};
pub use timespan::{accumulate_total_time, Timespan, TimespanError};
