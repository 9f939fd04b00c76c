//! Unified error types for the dishwasher controller.
//!
//! Device ports report narrow, typed faults ([`PumpFault`], [`EngineFault`]).
//! Everything funnels into the crate-wide [`Error`] so the orchestrator can
//! map any failure onto a single terminal [`Status`](crate::app::result::Status).
//! All variants are `Copy` so faults pass through the cycle without allocation.

use core::fmt;

use crate::program::ProgramStep;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The water pump could not fill or drain.
    Pump(PumpFault),
    /// The wash engine failed while executing program steps.
    Engine(EngineFault),
    /// Configuration is invalid or a required field is missing.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pump(e) => write!(f, "pump: {e}"),
            Self::Engine(e) => write!(f, "engine: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Pump faults
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpFault {
    /// Inlet valve or pump could not reach the requested fill level.
    PourFailed,
    /// Drain pump could not empty the tub.
    DrainFailed,
    /// Pump was commanded out of sequence (e.g. drain with an empty tub).
    NotReady,
}

impl fmt::Display for PumpFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PourFailed => write!(f, "pour failed"),
            Self::DrainFailed => write!(f, "drain failed"),
            Self::NotReady => write!(f, "pump not ready"),
        }
    }
}

impl From<PumpFault> for Error {
    fn from(e: PumpFault) -> Self {
        Self::Pump(e)
    }
}

// ---------------------------------------------------------------------------
// Engine faults
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineFault {
    /// A program step could not be executed.
    StepFailed(ProgramStep),
    /// Heater exceeded its thermal limit.
    OverTemperature,
}

impl fmt::Display for EngineFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StepFailed(step) => write!(f, "step {step} failed"),
            Self::OverTemperature => write!(f, "over temperature"),
        }
    }
}

impl From<EngineFault> for Error {
    fn from(e: EngineFault) -> Self {
        Self::Engine(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
