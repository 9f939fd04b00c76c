//! Recording mock devices for integration tests.
//!
//! All four mocks push onto one shared call log so tests can assert on the
//! interleaving of calls across devices, not just per-device order.

use std::cell::RefCell;
use std::rc::Rc;

use dishwasher::app::events::CycleEvent;
use dishwasher::{
    DirtFilter, Door, Engine, EngineFault, EventSink, FillLevel, ProgramStep, PumpFault, WaterPump,
};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    DoorClosed,
    DoorLock,
    DoorUnlock,
    FilterCapacity,
    Pour(FillLevel),
    RunProgram(Vec<ProgramStep>),
    Drain,
}

pub type CallLog = Rc<RefCell<Vec<DeviceCall>>>;

// ── Mocks ─────────────────────────────────────────────────────

pub struct MockDoor {
    log: CallLog,
    pub closed: bool,
}

pub struct MockPump {
    log: CallLog,
    pub pour_fault: Option<PumpFault>,
    pub drain_fault: Option<PumpFault>,
}

pub struct MockEngine {
    log: CallLog,
    pub fault: Option<EngineFault>,
}

pub struct MockFilter {
    log: CallLog,
    pub capacity: f64,
}

impl Door for MockDoor {
    fn closed(&mut self) -> bool {
        self.log.borrow_mut().push(DeviceCall::DoorClosed);
        self.closed
    }

    fn lock(&mut self) {
        self.log.borrow_mut().push(DeviceCall::DoorLock);
    }

    fn unlock(&mut self) {
        self.log.borrow_mut().push(DeviceCall::DoorUnlock);
    }
}

impl WaterPump for MockPump {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpFault> {
        self.log.borrow_mut().push(DeviceCall::Pour(level));
        self.pour_fault.map_or(Ok(()), Err)
    }

    fn drain(&mut self) -> Result<(), PumpFault> {
        self.log.borrow_mut().push(DeviceCall::Drain);
        self.drain_fault.map_or(Ok(()), Err)
    }
}

impl Engine for MockEngine {
    fn run_program(&mut self, steps: &[ProgramStep]) -> Result<(), EngineFault> {
        self.log
            .borrow_mut()
            .push(DeviceCall::RunProgram(steps.to_vec()));
        self.fault.map_or(Ok(()), Err)
    }
}

impl DirtFilter for MockFilter {
    fn capacity(&mut self) -> f64 {
        self.log.borrow_mut().push(DeviceCall::FilterCapacity);
        self.capacity
    }
}

// ── Rig ───────────────────────────────────────────────────────

/// One set of healthy devices sharing a call log.  Tweak the public
/// fields before handing the devices to a `DishWasher`.
pub struct MockRig {
    pub log: CallLog,
    pub door: MockDoor,
    pub pump: MockPump,
    pub engine: MockEngine,
    pub filter: MockFilter,
}

impl MockRig {
    pub fn new() -> Self {
        let log: CallLog = Rc::new(RefCell::new(Vec::new()));
        Self {
            door: MockDoor {
                log: Rc::clone(&log),
                closed: true,
            },
            pump: MockPump {
                log: Rc::clone(&log),
                pour_fault: None,
                drain_fault: None,
            },
            engine: MockEngine {
                log: Rc::clone(&log),
                fault: None,
            },
            filter: MockFilter {
                log: Rc::clone(&log),
                capacity: 100.0,
            },
            log,
        }
    }

    pub fn calls(&self) -> Vec<DeviceCall> {
        self.log.borrow().clone()
    }

    pub fn count(&self, call: &DeviceCall) -> usize {
        self.log.borrow().iter().filter(|c| *c == call).count()
    }
}

impl Default for MockRig {
    fn default() -> Self {
        Self::new()
    }
}

// ── Event capture ─────────────────────────────────────────────

pub struct EventLog {
    pub events: Vec<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &CycleEvent) {
        self.events.push(format!("{:?}", event));
    }
}
