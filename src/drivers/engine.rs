//! Wash engine driver (heater + circulation motor).
//!
//! Executes program steps in order and records which steps completed during
//! the most recent run.  A fault can be armed against a specific step.

use log::{debug, error};

use crate::app::ports::Engine;
use crate::error::EngineFault;
use crate::program::{MAX_PROGRAM_STEPS, ProgramStep};

/// Highest main-wash temperature the heater is rated for.
pub const MAX_WASH_TEMPERATURE_C: u8 = 75;

#[derive(Debug, Default)]
pub struct SimEngine {
    executed: heapless::Vec<ProgramStep, MAX_PROGRAM_STEPS>,
    fail_at: Option<ProgramStep>,
    runs: u32,
}

impl SimEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail when `step` is reached (until [`clear_fault`](Self::clear_fault)).
    pub fn fail_at(&mut self, step: ProgramStep) {
        self.fail_at = Some(step);
    }

    pub fn clear_fault(&mut self) {
        self.fail_at = None;
    }

    /// Steps completed in the most recent run.
    pub fn executed(&self) -> &[ProgramStep] {
        &self.executed
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    fn execute(&mut self, step: ProgramStep) -> Result<(), EngineFault> {
        if self.fail_at == Some(step) {
            return Err(EngineFault::StepFailed(step));
        }
        if let ProgramStep::MainWash { temperature_c } = step {
            if temperature_c > MAX_WASH_TEMPERATURE_C {
                return Err(EngineFault::OverTemperature);
            }
        }
        debug!("engine: {step}");
        self.executed
            .push(step)
            .map_err(EngineFault::StepFailed)
    }
}

impl Engine for SimEngine {
    fn run_program(&mut self, steps: &[ProgramStep]) -> Result<(), EngineFault> {
        self.runs += 1;
        self.executed.clear();
        for &step in steps {
            if let Err(e) = self.execute(step) {
                error!("engine: {e}");
                return Err(e);
            }
        }
        Ok(())
    }
}
