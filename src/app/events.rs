//! Outbound cycle events.
//!
//! The [`DishWasher`](super::service::DishWasher) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other side
//! decide what to do with them: log to serial, drive a front-panel display,
//! and so on.

use crate::app::result::{RunResult, Status};
use crate::error::Error;
use crate::fsm::CyclePhase;
use crate::program::ProgramConfiguration;

/// Structured events emitted during a cycle.
#[derive(Debug, Clone)]
pub enum CycleEvent {
    /// A cycle was requested with this configuration.
    Started(ProgramConfiguration),

    /// The cycle moved between phases.
    PhaseChanged { from: CyclePhase, to: CyclePhase },

    /// A precondition failed before any device was driven.
    PreconditionFailed(Status),

    /// A device reported a fault mid-cycle.
    Fault(Error),

    /// The cycle reached a terminal result.
    Finished(RunResult),
}
