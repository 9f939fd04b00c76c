//! The wash-cycle orchestrator.
//!
//! [`DishWasher`] owns (or borrows, via the `&mut T` port impls) the four
//! devices and sequences them through one cycle per [`DishWasher::start`]
//! call.  All I/O flows through port traits, making the entire sequence
//! testable with mock devices.
//!
//! ```text
//!        Door ──▶ ┌────────────────────────┐ ──▶ EventSink
//!  DirtFilter ──▶ │       DishWasher        │
//!   WaterPump ◀── │  checks · lock · wash   │
//!      Engine ◀── └────────────────────────┘
//! ```
//!
//! The sequence is strictly ordered and stops at the first failure:
//! door check, filter check (tablets only), lock, pour, run program, drain,
//! unlock.  No fault escapes `start`; every failure becomes a [`Status`].

use log::{error, info, warn};

use crate::adapters::log_sink::LogEventSink;
use crate::config::WasherConfig;
use crate::error::{Error, Result};
use crate::fsm::{CycleFsm, CyclePhase};
use crate::program::ProgramConfiguration;

use super::events::CycleEvent;
use super::ports::{DirtFilter, Door, Engine, EventSink, WaterPump};
use super::result::{RunResult, Status};

// ───────────────────────────────────────────────────────────────
// DishWasher
// ───────────────────────────────────────────────────────────────

pub struct DishWasher<P, E, F, D, S = LogEventSink> {
    pump: P,
    engine: E,
    filter: F,
    door: D,
    sink: S,
    config: WasherConfig,
}

impl<P, E, F, D> DishWasher<P, E, F, D>
where
    P: WaterPump,
    E: Engine,
    F: DirtFilter,
    D: Door,
{
    /// Wire the devices with default configuration and log-backed events.
    pub fn new(pump: P, engine: E, filter: F, door: D) -> Self {
        Self::with_sink(pump, engine, filter, door, LogEventSink::new())
    }
}

impl<P, E, F, D, S> DishWasher<P, E, F, D, S>
where
    P: WaterPump,
    E: Engine,
    F: DirtFilter,
    D: Door,
    S: EventSink,
{
    pub fn with_sink(pump: P, engine: E, filter: F, door: D, sink: S) -> Self {
        Self {
            pump,
            engine,
            filter,
            door,
            sink,
            config: WasherConfig::default(),
        }
    }

    /// Replace the controller configuration.  Rejected if it fails
    /// validation.
    pub fn with_config(mut self, config: WasherConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    // ── Cycle ─────────────────────────────────────────────────

    /// Run one full wash cycle and report its outcome.
    pub fn start(&mut self, program: &ProgramConfiguration) -> RunResult {
        info!(
            "cycle requested: {:?}, fill={:?}, tablets={}",
            program.program(),
            program.fill_level(),
            program.tablets_used()
        );
        self.sink.emit(&CycleEvent::Started(*program));

        let mut fsm = CycleFsm::new();
        let result = self.run_cycle(program, &mut fsm);

        info!(
            "cycle finished: status={} run_minutes={}",
            result.status(),
            result.run_minutes()
        );
        self.sink.emit(&CycleEvent::Finished(result));
        result
    }

    fn run_cycle(&mut self, program: &ProgramConfiguration, fsm: &mut CycleFsm) -> RunResult {
        // 1. Door must be shut before anything moves.
        if !self.door.closed() {
            warn!("door open, refusing to start");
            return self.precondition_failed(fsm, Status::DoorOpen);
        }

        // 2. Tablets need a reasonably clean filter.
        if program.tablets_used() {
            self.enter(fsm, CyclePhase::CheckFilter);
            let capacity = self.filter.capacity();
            if !self.config.filter_acceptable(capacity) {
                warn!(
                    "filter capacity {:.1} below {:.1}, refusing tablet cycle",
                    capacity, self.config.min_filter_capacity
                );
                return self.precondition_failed(fsm, Status::ErrorFilter);
            }
        }

        // 3. Lock, then wash.
        self.door.lock();
        self.enter(fsm, CyclePhase::LockedFilling);

        if let Err(e) = self.wash(program, fsm) {
            return self.abort(fsm, &e);
        }

        // 4. Release the door.
        self.door.unlock();
        self.enter(fsm, CyclePhase::Done);
        RunResult::success(program.program().duration_minutes())
    }

    /// Pour, run the program's steps, drain.  Stops at the first fault.
    fn wash(&mut self, program: &ProgramConfiguration, fsm: &mut CycleFsm) -> Result<()> {
        self.pump.pour(program.fill_level())?;
        self.enter(fsm, CyclePhase::Running);

        self.engine.run_program(&program.program().steps())?;
        self.enter(fsm, CyclePhase::Draining);

        self.pump.drain()?;
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &WasherConfig {
        &self.config
    }

    pub fn door(&self) -> &D {
        &self.door
    }

    pub fn pump(&self) -> &P {
        &self.pump
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Hand the devices back to the caller.
    pub fn into_parts(self) -> (P, E, F, D, S) {
        (self.pump, self.engine, self.filter, self.door, self.sink)
    }

    // ── Internal ──────────────────────────────────────────────

    fn enter(&mut self, fsm: &mut CycleFsm, to: CyclePhase) {
        if let Some(from) = fsm.advance(to) {
            self.sink.emit(&CycleEvent::PhaseChanged { from, to });
        }
    }

    fn precondition_failed(&mut self, fsm: &mut CycleFsm, status: Status) -> RunResult {
        self.sink.emit(&CycleEvent::PreconditionFailed(status));
        self.enter(fsm, CyclePhase::Failed(status));
        RunResult::error(status)
    }

    /// Map a mid-cycle fault onto its status, releasing the lock if
    /// configured to.
    fn abort(&mut self, fsm: &mut CycleFsm, fault: &Error) -> RunResult {
        error!("cycle fault during {}: {fault}", fsm.current().name());
        self.sink.emit(&CycleEvent::Fault(*fault));

        if self.config.unlock_on_fault {
            self.door.unlock();
        } else {
            warn!("door left locked after fault");
        }

        let status = Status::from(fault);
        self.enter(fsm, CyclePhase::Failed(status));
        RunResult::error(status)
    }
}
