//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured cycle events to the `log`
//! facade (UART on the appliance board, whatever logger the host installs
//! elsewhere).  A front-panel display adapter would implement the same trait.

use log::{info, warn};

use crate::app::events::CycleEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`CycleEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &CycleEvent) {
        match event {
            CycleEvent::Started(cfg) => {
                info!(
                    "START | program={:?} ({} min) | fill={:?} ({} L) | tablets={}",
                    cfg.program(),
                    cfg.program().duration_minutes(),
                    cfg.fill_level(),
                    cfg.fill_level().litres(),
                    if cfg.tablets_used() { "yes" } else { "no" },
                );
            }
            CycleEvent::PhaseChanged { from, to } => {
                info!("PHASE | {} -> {}", from.name(), to.name());
            }
            CycleEvent::PreconditionFailed(status) => {
                warn!("CHECK | precondition failed: {status}");
            }
            CycleEvent::Fault(e) => {
                warn!("FAULT | {e}");
            }
            CycleEvent::Finished(result) => {
                info!(
                    "END   | status={} | run={} min",
                    result.status(),
                    result.run_minutes()
                );
            }
        }
    }
}
