// SPDX-License-Identifier: Apache-2.0
//! The SCORM 1.2 error code table and last-error record.
//!
//! Codes and strings are fixed by the spec and polled by content after every
//! `"false"`/`""` result; the numbers must match exactly or existing
//! packages misbehave.

/// A SCORM 1.2 API error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiError {
    /// 0 — the previous call succeeded.
    #[default]
    NoError,
    /// 101 — lifecycle violation (double initialize, finish after finish).
    GeneralException,
    /// 201 — empty or missing element name.
    InvalidArgument,
    /// 202 — element cannot have children.
    NoChildren,
    /// 203 — element is not in the CMI schema.
    NotAnArray,
    /// 301 — data call before `LMSInitialize` or after `LMSFinish`.
    NotInitialized,
    /// 401 — optional element not implemented by this runtime.
    NotImplemented,
    /// 402 — attempted to set a keyword element.
    InvalidSetValue,
    /// 403 — attempted to write a read-only element.
    ReadOnlyElement,
    /// 404 — attempted to read a write-only element.
    WriteOnlyElement,
    /// 405 — value has the wrong data type for the element.
    IncorrectDataType,
}

impl ApiError {
    /// The code as the decimal string content receives from
    /// `LMSGetLastError`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::NoError => "0",
            Self::GeneralException => "101",
            Self::InvalidArgument => "201",
            Self::NoChildren => "202",
            Self::NotAnArray => "203",
            Self::NotInitialized => "301",
            Self::NotImplemented => "401",
            Self::InvalidSetValue => "402",
            Self::ReadOnlyElement => "403",
            Self::WriteOnlyElement => "404",
            Self::IncorrectDataType => "405",
        }
    }

    /// The fixed human-readable message for this code.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NoError => "No error",
            Self::GeneralException => "General exception",
            Self::InvalidArgument => "Invalid argument error",
            Self::NoChildren => "Element cannot have children",
            Self::NotAnArray => "Element not an array - cannot have count",
            Self::NotInitialized => "Not initialized",
            Self::NotImplemented => "Not implemented error",
            Self::InvalidSetValue => "Invalid set value, element is a keyword",
            Self::ReadOnlyElement => "Element is read only",
            Self::WriteOnlyElement => "Element is write only",
            Self::IncorrectDataType => "Incorrect data type",
        }
    }

    /// Parses a decimal code string back into an error, for
    /// `LMSGetErrorString`/`LMSGetDiagnostic` lookups.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "0" => Some(Self::NoError),
            "101" => Some(Self::GeneralException),
            "201" => Some(Self::InvalidArgument),
            "202" => Some(Self::NoChildren),
            "203" => Some(Self::NotAnArray),
            "301" => Some(Self::NotInitialized),
            "401" => Some(Self::NotImplemented),
            "402" => Some(Self::InvalidSetValue),
            "403" => Some(Self::ReadOnlyElement),
            "404" => Some(Self::WriteOnlyElement),
            "405" => Some(Self::IncorrectDataType),
            _ => None,
        }
    }
}

/// `LMSGetErrorString` semantics: fixed table lookup, `"Unknown error"` for
/// anything outside it.
#[must_use]
pub fn error_string(code: &str) -> &'static str {
    ApiError::from_code(code).map_or("Unknown error", ApiError::message)
}

/// The queryable last-error record, updated by every fallible call.
#[derive(Debug, Clone, Default)]
pub struct LastError {
    /// Outcome of the most recent fallible call.
    pub error: ApiError,
    /// Optional diagnostic text attached at the failure site.
    pub diagnostic: Option<String>,
}

impl LastError {
    /// Records a failure with diagnostic text.
    pub fn fail(&mut self, error: ApiError, diagnostic: String) {
        self.error = error;
        self.diagnostic = Some(diagnostic);
    }

    /// Records a success, clearing any stale diagnostic.
    pub fn clear(&mut self) {
        self.error = ApiError::NoError;
        self.diagnostic = None;
    }
}
