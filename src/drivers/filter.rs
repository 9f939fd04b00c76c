//! Dirt filter sensor.
//!
//! Reports remaining capacity as a percentage of a clean filter.  The
//! reading is clamped to 0–100; interpreting it is the controller's job.

#[derive(Debug, Clone, Copy)]
pub struct SimFilter {
    capacity: f64,
    reads: u32,
}

impl SimFilter {
    pub fn new(capacity: f64) -> Self {
        Self {
            capacity: capacity.clamp(0.0, 100.0),
            reads: 0,
        }
    }

    /// Simulate the filter being cleaned or clogging up.
    pub fn set_capacity(&mut self, capacity: f64) {
        self.capacity = capacity.clamp(0.0, 100.0);
    }

    /// How many times the sensor has been read.
    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl crate::app::ports::DirtFilter for SimFilter {
    fn capacity(&mut self) -> f64 {
        self.reads += 1;
        self.capacity
    }
}
