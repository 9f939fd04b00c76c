//! Terminal outcome of a wash cycle.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Exactly one status is reported per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    DoorOpen,
    ErrorFilter,
    ErrorProgram,
    ErrorPump,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "SUCCESS"),
            Self::DoorOpen => write!(f, "DOOR_OPEN"),
            Self::ErrorFilter => write!(f, "ERROR_FILTER"),
            Self::ErrorProgram => write!(f, "ERROR_PROGRAM"),
            Self::ErrorPump => write!(f, "ERROR_PUMP"),
        }
    }
}

impl From<&Error> for Status {
    fn from(e: &Error) -> Self {
        match e {
            Error::Pump(_) => Self::ErrorPump,
            // A bad configuration never reaches a device; it is a program error.
            Error::Engine(_) | Error::Config(_) => Self::ErrorProgram,
        }
    }
}

/// Status plus elapsed run time.  `run_minutes` is only meaningful for
/// [`Status::Success`] and is zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    status: Status,
    run_minutes: u32,
}

impl RunResult {
    pub fn builder() -> RunResultBuilder {
        RunResultBuilder::default()
    }

    pub fn success(run_minutes: u32) -> Self {
        Self {
            status: Status::Success,
            run_minutes,
        }
    }

    pub fn error(status: Status) -> Self {
        Self {
            status,
            run_minutes: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn run_minutes(&self) -> u32 {
        self.run_minutes
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunResultBuilder {
    status: Option<Status>,
    run_minutes: u32,
}

impl RunResultBuilder {
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_run_minutes(mut self, run_minutes: u32) -> Self {
        self.run_minutes = run_minutes;
        self
    }

    /// Minutes supplied for a non-success status are discarded.
    pub fn build(self) -> Result<RunResult> {
        let status = self.status.ok_or(Error::Config("status is required"))?;
        Ok(match status {
            Status::Success => RunResult::success(self.run_minutes),
            other => RunResult::error(other),
        })
    }
}
