//! Application core — pure cycle logic, zero I/O.
//!
//! This module contains the control sequence for one wash cycle: the
//! ordered precondition checks, device commands, and fault-to-status
//! mapping.  All interaction with hardware happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! devices.

pub mod events;
pub mod ports;
pub mod result;
pub mod service;
