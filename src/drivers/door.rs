//! Door reed switch and lock solenoid.
//!
//! The reed switch reads HIGH when the door magnet is present (door shut).
//! The lock solenoid engages on HIGH.
//!
//! ## Fail-safe reads
//!
//! A pin read error is reported as "open": a cycle must never start on a
//! door whose state is unknown.  Solenoid write errors are logged; the
//! lock contract has no error channel.

use embedded_hal::digital::{InputPin, OutputPin};
use log::{error, warn};

use crate::app::ports::Door;

pub struct GpioDoor<S, L> {
    switch: S,
    solenoid: L,
    locked: bool,
}

impl<S, L> GpioDoor<S, L>
where
    S: InputPin,
    L: OutputPin,
{
    pub fn new(switch: S, solenoid: L) -> Self {
        Self {
            switch,
            solenoid,
            locked: false,
        }
    }

    /// Last commanded lock state.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Release the pins.
    pub fn release(self) -> (S, L) {
        (self.switch, self.solenoid)
    }
}

impl<S, L> Door for GpioDoor<S, L>
where
    S: InputPin,
    L: OutputPin,
{
    fn closed(&mut self) -> bool {
        match self.switch.is_high() {
            Ok(closed) => closed,
            Err(e) => {
                warn!("door switch read failed ({e:?}), treating door as open");
                false
            }
        }
    }

    fn lock(&mut self) {
        if let Err(e) = self.solenoid.set_high() {
            error!("door lock solenoid write failed: {e:?}");
        }
        self.locked = true;
    }

    fn unlock(&mut self) {
        if let Err(e) = self.solenoid.set_low() {
            error!("door unlock solenoid write failed: {e:?}");
        }
        self.locked = false;
    }
}
