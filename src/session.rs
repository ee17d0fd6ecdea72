use crate::daemon::DaemonEvent;
use crate::event::SwapSpawnType;
use crate::logs::{parse_log_buffer, LogRecord};
use crate::state::SwapState;
use crate::stepper::{classify, StepperState};

/// Session-held projection of the swap currently on screen.
///
/// Owned by the host's single-threaded dispatch loop and mutated only there,
/// one inbound message at a time, in arrival order. The held [`SwapState`] is
/// replaced wholesale per event, never edited in place, so a render that
/// reads between dispatches always sees a complete pair. Nothing here is
/// persisted; a restart starts blank on purpose, so stale "in progress" UI
/// cannot outlive a daemon that resolved the swap on its own.
pub struct SwapSession {
    spawn_type: SwapSpawnType,
    state: Option<SwapState>,
    logs: Vec<LogRecord>,
    process_exited: bool,
}

impl SwapSession {
    pub fn new(spawn_type: SwapSpawnType) -> Self {
        Self {
            spawn_type,
            state: None,
            logs: Vec::new(),
            process_exited: false,
        }
    }

    pub fn spawn_type(&self) -> SwapSpawnType {
        self.spawn_type
    }

    pub fn state(&self) -> Option<&SwapState> {
        self.state.as_ref()
    }

    /// Every log record received this session, in arrival order.
    pub fn logs(&self) -> &[LogRecord] {
        &self.logs
    }

    /// Mark the daemon process as gone. From here on, non-terminal steps
    /// render as failed.
    pub fn mark_process_exited(&mut self) {
        self.process_exited = true;
    }

    /// Fold one inbound daemon message into the session.
    pub fn apply(&mut self, event: DaemonEvent) {
        match event {
            DaemonEvent::SwapProgress(update) => {
                log::debug!("swap progress for {}", update.swap_id);
                self.state = Some(SwapState::reduce(self.state.as_ref(), &update));
            }
            DaemonEvent::CliLog { buffer } => {
                self.logs.extend(parse_log_buffer(&buffer));
            }
        }
    }

    /// Log records pertaining to the swap currently on screen. Empty until
    /// the first progress event names one.
    pub fn logs_for_current_swap(&self) -> Vec<&LogRecord> {
        match &self.state {
            Some(state) => self
                .logs
                .iter()
                .filter(|record| record.belongs_to_swap(&state.swap_id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Stepper display state derived from the held pair. A session spawned
    /// for a cancel-refund renders the unhappy path regardless of what the
    /// daemon last reported.
    pub fn stepper(&self) -> StepperState {
        classify(
            self.state.as_ref().map(|state| &state.current),
            self.process_exited,
            self.spawn_type == SwapSpawnType::CancelRefund,
        )
    }
}
