//! Port traits — the hexagonal boundary between the cycle logic and the
//! appliance hardware.
//!
//! ```text
//!   Driver ──▶ Port trait ──▶ DishWasher (domain)
//! ```
//!
//! Device drivers (door switch, pumps, wash engine, filter sensor) implement
//! these traits.  The [`DishWasher`](super::service::DishWasher) consumes
//! them via generics, so the orchestration never touches hardware directly
//! and can be exercised against substitutable fakes.
//!
//! Every port is also implemented for `&mut T`, which lets a caller lend
//! its devices to the orchestrator while keeping ownership.

use crate::error::{EngineFault, PumpFault};
use crate::program::{FillLevel, ProgramStep};

// ───────────────────────────────────────────────────────────────
// Door
// ───────────────────────────────────────────────────────────────

/// Door switch and lock solenoid.
pub trait Door {
    /// Whether the door is shut.  Side-effect free.
    fn closed(&mut self) -> bool;

    /// Engage the lock.  Assumed to always succeed.
    fn lock(&mut self);

    /// Release the lock.  Assumed to always succeed.
    fn unlock(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Water pump
// ───────────────────────────────────────────────────────────────

/// Inlet/drain pump pair.
pub trait WaterPump {
    /// Fill the tub to `level`.
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpFault>;

    /// Empty the tub.
    fn drain(&mut self) -> Result<(), PumpFault>;
}

// ───────────────────────────────────────────────────────────────
// Engine
// ───────────────────────────────────────────────────────────────

/// Heater and spray-arm motor.
pub trait Engine {
    /// Execute `steps` in order, stopping at the first failure.
    fn run_program(&mut self, steps: &[ProgramStep]) -> Result<(), EngineFault>;
}

// ───────────────────────────────────────────────────────────────
// Dirt filter
// ───────────────────────────────────────────────────────────────

/// Filter cleanliness sensor.
pub trait DirtFilter {
    /// Remaining capacity as a percentage of a clean filter.  Side-effect
    /// free; the threshold comparison belongs to the caller.
    fn capacity(&mut self) -> f64;
}

// ───────────────────────────────────────────────────────────────
// Event sink (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The orchestrator emits structured [`CycleEvent`](super::events::CycleEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::CycleEvent);
}

// ───────────────────────────────────────────────────────────────
// Borrowed devices
// ───────────────────────────────────────────────────────────────

impl<T: Door + ?Sized> Door for &mut T {
    fn closed(&mut self) -> bool {
        (**self).closed()
    }

    fn lock(&mut self) {
        (**self).lock();
    }

    fn unlock(&mut self) {
        (**self).unlock();
    }
}

impl<T: WaterPump + ?Sized> WaterPump for &mut T {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpFault> {
        (**self).pour(level)
    }

    fn drain(&mut self) -> Result<(), PumpFault> {
        (**self).drain()
    }
}

impl<T: Engine + ?Sized> Engine for &mut T {
    fn run_program(&mut self, steps: &[ProgramStep]) -> Result<(), EngineFault> {
        (**self).run_program(steps)
    }
}

impl<T: DirtFilter + ?Sized> DirtFilter for &mut T {
    fn capacity(&mut self) -> f64 {
        (**self).capacity()
    }
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: &super::events::CycleEvent) {
        (**self).emit(event);
    }
}
