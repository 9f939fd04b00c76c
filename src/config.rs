//! Controller configuration parameters
//!
//! Tunables for the wash-cycle controller. Values can be loaded from JSON
//! (service tooling) or from the compact postcard encoding kept in flash.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowest acceptable dirt-filter capacity reading (percent of a clean
/// filter) for a cycle that uses detergent tablets.  Readings strictly
/// below this are rejected with `ERROR_FILTER`.
pub const MIN_FILTER_CAPACITY: f64 = 50.0;

/// Core controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WasherConfig {
    /// Filter capacity threshold used when tablets are in the dispenser
    pub min_filter_capacity: f64,
    /// Release the door lock when a fault ends a cycle after locking
    pub unlock_on_fault: bool,
}

impl Default for WasherConfig {
    fn default() -> Self {
        Self {
            min_filter_capacity: MIN_FILTER_CAPACITY,
            unlock_on_fault: true,
        }
    }
}

impl WasherConfig {
    /// Reject values outside the physically meaningful range.
    pub fn validate(&self) -> Result<()> {
        if !self.min_filter_capacity.is_finite() {
            return Err(Error::Config("min_filter_capacity must be finite"));
        }
        if !(0.0..=100.0).contains(&self.min_filter_capacity) {
            return Err(Error::Config("min_filter_capacity must be within 0..=100"));
        }
        Ok(())
    }

    /// Whether a filter reading is good enough for a tablet cycle.
    pub fn filter_acceptable(&self, capacity: f64) -> bool {
        capacity >= self.min_filter_capacity
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        postcard::to_allocvec(self).map_err(|_| Error::Config("encode failed"))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let config: Self =
            postcard::from_bytes(bytes).map_err(|_| Error::Config("corrupted config blob"))?;
        config.validate()?;
        Ok(config)
    }
}
