//! Wash-cycle phase tracker.
//!
//! A cycle walks a fixed, strictly sequential path:
//!
//! ```text
//!  CHECK_DOOR ──▶ CHECK_FILTER ──▶ LOCKED_FILLING ──▶ RUNNING ──▶ DRAINING ──▶ DONE
//!      │    └────────(no tablets)────────▲                │           │
//!      │               │                 │                │           │
//!      └───────────────┴────────┬────────┴────────────────┴───────────┘
//!                               ▼
//!                         FAILED(status)
//! ```
//!
//! `CHECK_DOOR` is initial; `DONE` and `FAILED` are terminal.  The tracker
//! refuses any transition not in the table above, so a mis-ordered
//! orchestration step shows up as a logged rejection rather than a silent
//! reorder.

use log::{debug, info, warn};

use crate::app::result::Status;

/// Maximum phases a single cycle can visit (initial + 5 forward + terminal).
pub const MAX_CYCLE_PHASES: usize = 8;

// ---------------------------------------------------------------------------
// Phase identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    CheckDoor,
    CheckFilter,
    LockedFilling,
    Running,
    Draining,
    Done,
    Failed(Status),
}

impl CyclePhase {
    pub fn name(self) -> &'static str {
        match self {
            Self::CheckDoor => "CheckDoor",
            Self::CheckFilter => "CheckFilter",
            Self::LockedFilling => "LockedFilling",
            Self::Running => "Running",
            Self::Draining => "Draining",
            Self::Done => "Done",
            Self::Failed(_) => "Failed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed(_))
    }

    /// Whether the door lock is engaged while in this phase.
    pub fn door_locked(self) -> bool {
        matches!(self, Self::LockedFilling | Self::Running | Self::Draining)
    }

    /// Legal-transition table.
    fn can_transition(self, next: Self) -> bool {
        use CyclePhase::{CheckDoor, CheckFilter, Done, Draining, Failed, LockedFilling, Running};
        match (self, next) {
            (CheckDoor, CheckFilter | LockedFilling)
            | (CheckFilter, LockedFilling)
            | (LockedFilling, Running)
            | (Running, Draining)
            | (Draining, Done) => true,
            (Failed(_) | Done, _) => false,
            (_, Failed(status)) => status != Status::Success,
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

/// Tracks the phase of one cycle and the path it took.
#[derive(Debug, Clone)]
pub struct CycleFsm {
    current: CyclePhase,
    history: heapless::Vec<CyclePhase, MAX_CYCLE_PHASES>,
}

impl CycleFsm {
    pub fn new() -> Self {
        let mut history = heapless::Vec::new();
        let _ = history.push(CyclePhase::CheckDoor);
        Self {
            current: CyclePhase::CheckDoor,
            history,
        }
    }

    pub fn current(&self) -> CyclePhase {
        self.current
    }

    /// Every phase visited so far, initial phase first.
    pub fn history(&self) -> &[CyclePhase] {
        &self.history
    }

    /// Move to `next`.  Returns the phase left on success; rejects and logs
    /// transitions outside the table.
    pub fn advance(&mut self, next: CyclePhase) -> Option<CyclePhase> {
        if !self.current.can_transition(next) {
            warn!(
                "cycle transition rejected: {} -> {}",
                self.current.name(),
                next.name()
            );
            return None;
        }

        let prev = self.current;
        match next {
            CyclePhase::Failed(status) => {
                info!("cycle transition: {} -> Failed({status})", prev.name());
            }
            _ => info!("cycle transition: {} -> {}", prev.name(), next.name()),
        }
        self.current = next;
        if self.history.push(next).is_err() {
            debug!("cycle history full, dropping {}", next.name());
        }
        Some(prev)
    }

    /// Enter `Failed(status)` from any non-terminal phase.
    pub fn fail(&mut self, status: Status) -> Option<CyclePhase> {
        self.advance(CyclePhase::Failed(status))
    }
}

impl Default for CycleFsm {
    fn default() -> Self {
        Self::new()
    }
}
