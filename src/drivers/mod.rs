//! Device drivers implementing the appliance ports.
//!
//! `door` drives real pins through `embedded-hal`; the pump, engine and
//! filter drivers keep their state in memory so the controller can run on
//! the host with injectable faults.

pub mod door;
pub mod engine;
pub mod filter;
pub mod pump;
