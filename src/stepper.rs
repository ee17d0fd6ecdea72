use serde::{Deserialize, Serialize};

use crate::event::ProgressEvent;

/// Which of the two fixed step sequences the stepper renders.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum SwapPath {
    Happy,
    Unhappy,
}

/// Captions for the happy path steps, indexed by `step_index`. An index one
/// past the end marks a completed swap.
pub const HAPPY_PATH_STEPS: [&str; 4] = [
    "Locking your BTC",
    "They lock their XMR",
    "They redeem your BTC",
    "Redeeming your XMR",
];

/// Captions for the unhappy (refund) path steps.
pub const UNHAPPY_PATH_STEPS: [&str; 2] = ["Cancelling swap", "Refunding your BTC"];

/// Stepper display state, derived per render from the latest event. Never
/// stored anywhere.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
pub struct StepperState {
    pub path: SwapPath,
    pub step_index: usize,
    pub has_error: bool,
}

/// Map the latest protocol state onto the stepper.
///
/// For non-terminal steps the failure signal is `process_exited`, not the
/// state itself: the daemon stopped mid-step without completing it. Terminal
/// successes (`XmrRedeemed`, `BtcRefunded`) never show an error; terminal
/// failures (`SafelyAborted`, `BtcPunished`) always do.
///
/// `manual_cancel_refund` wins over whatever the daemon last reported. The
/// user explicitly asked for a cancel-refund and the daemon's state may not
/// have caught up yet, so the stepper jumps straight to the start of the
/// unhappy path.
///
/// The match is exhaustive over [`ProgressEvent`] on purpose: a protocol
/// state this table does not know is a compile error here and a decode error
/// at the wire, never a silent default.
pub fn classify(
    current: Option<&ProgressEvent>,
    process_exited: bool,
    manual_cancel_refund: bool,
) -> StepperState {
    if manual_cancel_refund {
        return StepperState {
            path: SwapPath::Unhappy,
            step_index: 0,
            has_error: process_exited,
        };
    }

    let (path, step_index, has_error) = match current {
        None
        | Some(ProgressEvent::Started { .. })
        | Some(ProgressEvent::SwapSetupCompleted) => (SwapPath::Happy, 0, process_exited),
        Some(ProgressEvent::BtcLocked { .. })
        | Some(ProgressEvent::XmrLockProofReceived { .. }) => {
            (SwapPath::Happy, 1, process_exited)
        }
        Some(ProgressEvent::XmrLocked) | Some(ProgressEvent::EncSigSent) => {
            (SwapPath::Happy, 2, process_exited)
        }
        Some(ProgressEvent::BtcRedeemed { .. }) => (SwapPath::Happy, 3, process_exited),
        Some(ProgressEvent::XmrRedeemed { .. }) => (SwapPath::Happy, 4, false),
        // Aborting before any funds moved parks the stepper on the first
        // step with the error flag fixed on, daemon running or not.
        Some(ProgressEvent::SafelyAborted) => (SwapPath::Happy, 0, true),
        Some(ProgressEvent::CancelTimelockExpired) => (SwapPath::Unhappy, 0, process_exited),
        Some(ProgressEvent::BtcCancelled { .. }) => (SwapPath::Unhappy, 1, process_exited),
        Some(ProgressEvent::BtcRefunded { .. }) => (SwapPath::Unhappy, 2, false),
        Some(ProgressEvent::BtcPunished) => (SwapPath::Unhappy, 1, true),
        // A rejected cooperative redeem is the failed last resort after a
        // punish; it lands on the same cell.
        Some(ProgressEvent::CooperativeRedeemRejected { .. }) => (SwapPath::Unhappy, 1, true),
    };

    StepperState {
        path,
        step_index,
        has_error,
    }
}
