// SPDX-License-Identifier: Apache-2.0
//! Attempt lifecycle state machine.
//!
//! The lifecycle only moves forward: not initialized -> running -> finished.
//! A finished session is terminal; `RuntimeBridge::reset` constructs a fresh
//! phase rather than transitioning backwards.

use crate::error::ApiError;

/// Lifecycle phase of one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Constructed; no successful `LMSInitialize` yet.
    #[default]
    NotInitialized,
    /// Between a successful `LMSInitialize` and `LMSFinish`.
    Running,
    /// `LMSFinish` succeeded; terminal.
    Finished,
}

impl Phase {
    /// `LMSInitialize` transition. Fails with 101 both when already running
    /// and when the session already finished.
    pub fn begin(&mut self) -> Result<(), ApiError> {
        match self {
            Self::NotInitialized => {
                *self = Self::Running;
                Ok(())
            }
            Self::Running | Self::Finished => Err(ApiError::GeneralException),
        }
    }

    /// `LMSFinish` transition. 301 before initialize, 101 after finish.
    pub fn end(&mut self) -> Result<(), ApiError> {
        match self {
            Self::Running => {
                *self = Self::Finished;
                Ok(())
            }
            Self::NotInitialized => Err(ApiError::NotInitialized),
            Self::Finished => Err(ApiError::GeneralException),
        }
    }

    /// Gate for the data calls (`LMSGetValue`/`LMSSetValue`/`LMSCommit`).
    pub fn require_running(self) -> Result<(), ApiError> {
        if self == Self::Running {
            Ok(())
        } else {
            Err(ApiError::NotInitialized)
        }
    }
}
