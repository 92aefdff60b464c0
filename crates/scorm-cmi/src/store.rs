// SPDX-License-Identifier: Apache-2.0
//! In-memory CMI attempt store.
//!
//! One `CmiStore` holds one attempt's state. The store enforces the schema
//! (unknown elements are rejected, never created) and the per-element access
//! mode on the content-facing `get`/`set` path; host-side writes go through
//! `put_unchecked`/`merge`, which still reject unknown elements but bypass
//! the access mode.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::schema::{lookup, Access, ELEMENTS};

/// Error type for store access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CmiError {
    /// Element name is not in the CMI schema.
    #[error("unknown CMI element: {element}")]
    UnknownElement {
        /// The offending element name.
        element: String,
    },
    /// Content attempted to write a read-only element.
    #[error("CMI element is read only: {element}")]
    ReadOnly {
        /// The offending element name.
        element: String,
    },
    /// Content attempted to read a write-only element.
    #[error("CMI element is write only: {element}")]
    WriteOnly {
        /// The offending element name.
        element: String,
    },
}

/// One attempt's CMI state, seeded from the schema defaults.
///
/// Keys are the `&'static str` names from the schema table, so the key set
/// is fixed at construction and only values change.
#[derive(Debug, Clone)]
pub struct CmiStore {
    values: BTreeMap<&'static str, String>,
}

impl Default for CmiStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CmiStore {
    /// Creates a store holding the schema defaults (a fresh attempt).
    #[must_use]
    pub fn new() -> Self {
        let values = ELEMENTS
            .iter()
            .map(|def| (def.name, def.default.to_string()))
            .collect();
        Self { values }
    }

    /// Content-facing read. Enforces the write-only rule.
    pub fn get(&self, element: &str) -> Result<&str, CmiError> {
        let def = lookup(element).ok_or_else(|| CmiError::UnknownElement {
            element: element.to_string(),
        })?;
        if def.access == Access::WriteOnly {
            return Err(CmiError::WriteOnly {
                element: element.to_string(),
            });
        }
        // Key set mirrors the schema, so the lookup cannot miss.
        Ok(self.values.get(def.name).map_or("", String::as_str))
    }

    /// Content-facing write. Enforces the read-only rule; stores the value
    /// verbatim (no enumeration or format validation).
    pub fn set(&mut self, element: &str, value: &str) -> Result<(), CmiError> {
        let def = lookup(element).ok_or_else(|| CmiError::UnknownElement {
            element: element.to_string(),
        })?;
        if def.access == Access::ReadOnly {
            return Err(CmiError::ReadOnly {
                element: element.to_string(),
            });
        }
        self.values.insert(def.name, value.to_string());
        Ok(())
    }

    /// Host-side write that bypasses the access mode but still rejects
    /// unknown elements. Backs `load_data` and `set_student_info`.
    pub fn put_unchecked(&mut self, element: &str, value: &str) -> Result<(), CmiError> {
        let def = lookup(element).ok_or_else(|| CmiError::UnknownElement {
            element: element.to_string(),
        })?;
        self.values.insert(def.name, value.to_string());
        Ok(())
    }

    /// Merges a partial snapshot over the current state (resume path).
    /// Unknown keys are skipped rather than rejected, so a snapshot written
    /// by a newer schema still loads.
    pub fn merge<'a, I>(&mut self, partial: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (element, value) in partial {
            if let Some(def) = lookup(element) {
                self.values.insert(def.name, value.to_string());
            }
        }
    }

    /// Owned copy of the current state. Never hands out the live map, so
    /// callers cannot mutate attempt state behind the runtime's back.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    /// Restores every element to its schema default.
    pub fn reset(&mut self) {
        for def in ELEMENTS {
            self.values.insert(def.name, def.default.to_string());
        }
    }
}
