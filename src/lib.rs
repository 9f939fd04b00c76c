//! Dishwasher wash-cycle controller.
//!
//! Sequences a door, water pump, wash engine and dirt filter through one
//! wash cycle per [`DishWasher::start`](app::service::DishWasher::start)
//! call and reports the outcome as a [`RunResult`](app::result::RunResult).

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod fsm;
pub mod program;

pub use app::ports::{DirtFilter, Door, Engine, EventSink, WaterPump};
pub use app::result::{RunResult, Status};
pub use app::service::DishWasher;
pub use error::{EngineFault, Error, PumpFault};
pub use program::{FillLevel, ProgramConfiguration, ProgramStep, WashingProgram};
