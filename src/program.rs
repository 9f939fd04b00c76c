//! Wash programs, fill levels and the per-cycle program configuration.
//!
//! Programs are compile-time data: each one carries a fixed run duration
//! and an ordered list of [`ProgramStep`]s that the engine executes.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upper bound on steps in any built-in program.
pub const MAX_PROGRAM_STEPS: usize = 8;

/// Ordered step sequence handed to the engine.
pub type ProgramSteps = heapless::Vec<ProgramStep, MAX_PROGRAM_STEPS>;

// ---------------------------------------------------------------------------
// Program steps
// ---------------------------------------------------------------------------

/// A single engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramStep {
    PreWash,
    MainWash { temperature_c: u8 },
    Rinse,
    Dry,
}

impl fmt::Display for ProgramStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreWash => write!(f, "pre-wash"),
            Self::MainWash { temperature_c } => write!(f, "main wash @{temperature_c}\u{00b0}C"),
            Self::Rinse => write!(f, "rinse"),
            Self::Dry => write!(f, "dry"),
        }
    }
}

// ---------------------------------------------------------------------------
// Washing program
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WashingProgram {
    Eco,
    Intensive,
    Night,
    Rinse,
}

impl WashingProgram {
    pub const ALL: [Self; 4] = [Self::Eco, Self::Intensive, Self::Night, Self::Rinse];

    /// Fixed run time reported on a successful cycle.
    pub const fn duration_minutes(self) -> u32 {
        match self {
            Self::Eco => 90,
            Self::Intensive => 120,
            Self::Night => 180,
            Self::Rinse => 20,
        }
    }

    fn step_table(self) -> &'static [ProgramStep] {
        use ProgramStep::{Dry, MainWash, PreWash, Rinse};
        match self {
            Self::Eco => &[PreWash, MainWash { temperature_c: 50 }, Rinse, Dry],
            Self::Intensive => &[
                PreWash,
                MainWash { temperature_c: 70 },
                Rinse,
                Rinse,
                Dry,
            ],
            Self::Night => &[MainWash { temperature_c: 45 }, Rinse, Dry],
            Self::Rinse => &[Rinse],
        }
    }

    /// The ordered steps the engine runs for this program.
    pub fn steps(self) -> ProgramSteps {
        let mut steps = ProgramSteps::new();
        for &step in self.step_table() {
            // Tables are sized to MAX_PROGRAM_STEPS; checked in tests.
            let _ = steps.push(step);
        }
        steps
    }
}

// ---------------------------------------------------------------------------
// Fill level
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillLevel {
    Half,
    Full,
}

impl FillLevel {
    pub const ALL: [Self; 2] = [Self::Half, Self::Full];

    /// Nominal water volume for this level.
    pub const fn litres(self) -> u8 {
        match self {
            Self::Half => 6,
            Self::Full => 12,
        }
    }
}

// ---------------------------------------------------------------------------
// Program configuration
// ---------------------------------------------------------------------------

/// What the user asked for: one immutable value per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramConfiguration {
    program: WashingProgram,
    fill_level: FillLevel,
    tablets_used: bool,
}

impl ProgramConfiguration {
    pub fn new(program: WashingProgram, fill_level: FillLevel, tablets_used: bool) -> Self {
        Self {
            program,
            fill_level,
            tablets_used,
        }
    }

    pub fn builder() -> ProgramConfigurationBuilder {
        ProgramConfigurationBuilder::default()
    }

    pub fn program(&self) -> WashingProgram {
        self.program
    }

    pub fn fill_level(&self) -> FillLevel {
        self.fill_level
    }

    pub fn tablets_used(&self) -> bool {
        self.tablets_used
    }
}

/// Builder for [`ProgramConfiguration`].  `program` and `fill_level` are
/// required; `tablets_used` defaults to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramConfigurationBuilder {
    program: Option<WashingProgram>,
    fill_level: Option<FillLevel>,
    tablets_used: bool,
}

impl ProgramConfigurationBuilder {
    #[must_use]
    pub fn with_program(mut self, program: WashingProgram) -> Self {
        self.program = Some(program);
        self
    }

    #[must_use]
    pub fn with_fill_level(mut self, fill_level: FillLevel) -> Self {
        self.fill_level = Some(fill_level);
        self
    }

    #[must_use]
    pub fn with_tablets_used(mut self, tablets_used: bool) -> Self {
        self.tablets_used = tablets_used;
        self
    }

    pub fn build(self) -> Result<ProgramConfiguration> {
        let program = self.program.ok_or(Error::Config("program is required"))?;
        let fill_level = self
            .fill_level
            .ok_or(Error::Config("fill level is required"))?;
        Ok(ProgramConfiguration::new(program, fill_level, self.tablets_used))
    }
}
