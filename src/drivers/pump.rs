//! Inlet/drain pump driver.
//!
//! Tracks tub state in memory: a pour fills the tub to the requested level
//! (topping up if water is already present), a drain empties it.  Draining
//! an empty tub is reported as [`PumpFault::NotReady`].
//!
//! Faults can be injected for the next pour or drain to exercise the
//! controller's failure paths on the host.

use log::{debug, warn};

use crate::app::ports::WaterPump;
use crate::error::PumpFault;
use crate::program::FillLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpState {
    Empty,
    Filled(FillLevel),
}

#[derive(Debug)]
pub struct SimPump {
    state: PumpState,
    fail_pour: bool,
    fail_drain: bool,
    pours: u32,
    drains: u32,
}

impl SimPump {
    pub fn new() -> Self {
        Self {
            state: PumpState::Empty,
            fail_pour: false,
            fail_drain: false,
            pours: 0,
            drains: 0,
        }
    }

    /// Make the next `pour` report [`PumpFault::PourFailed`].
    pub fn fail_next_pour(&mut self) {
        self.fail_pour = true;
    }

    /// Make the next `drain` report [`PumpFault::DrainFailed`].
    pub fn fail_next_drain(&mut self) {
        self.fail_drain = true;
    }

    pub fn state(&self) -> PumpState {
        self.state
    }

    pub fn is_filled(&self) -> bool {
        !matches!(self.state, PumpState::Empty)
    }

    /// Pour attempts, including failed ones.
    pub fn pours(&self) -> u32 {
        self.pours
    }

    /// Drain attempts, including failed ones.
    pub fn drains(&self) -> u32 {
        self.drains
    }
}

impl Default for SimPump {
    fn default() -> Self {
        Self::new()
    }
}

impl WaterPump for SimPump {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpFault> {
        self.pours += 1;
        if core::mem::take(&mut self.fail_pour) {
            warn!("pump: inlet fault while filling to {:?}", level);
            return Err(PumpFault::PourFailed);
        }
        debug!("pump: filled to {:?} ({} L)", level, level.litres());
        self.state = PumpState::Filled(level);
        Ok(())
    }

    fn drain(&mut self) -> Result<(), PumpFault> {
        self.drains += 1;
        if core::mem::take(&mut self.fail_drain) {
            warn!("pump: drain fault");
            return Err(PumpFault::DrainFailed);
        }
        if self.state == PumpState::Empty {
            return Err(PumpFault::NotReady);
        }
        debug!("pump: drained");
        self.state = PumpState::Empty;
        Ok(())
    }
}
