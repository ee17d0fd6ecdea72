use crate::event::{ProgressEvent, SwapProgressUpdate};

/// The two-deep event history the UI holds for the swap on screen.
///
/// `previous` is `None` exactly when no earlier event has been recorded for
/// the current `swap_id`. This projection is not the system of record: when
/// the daemon switches to another swap the pair is replaced wholesale and the
/// old history is gone.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapState {
    pub swap_id: String,
    pub current: ProgressEvent,
    pub previous: Option<ProgressEvent>,
}

impl SwapState {
    /// Fold one progress update into the held pair.
    ///
    /// The first event for a swap id starts a fresh pair; every later event
    /// for the same id shifts `current` into `previous`. Pure function, no
    /// I/O; the caller assigns the result back, so concurrent readers only
    /// ever see a complete pair. Updates are folded in strict arrival order
    /// and are neither reordered nor deduplicated here; in-order delivery
    /// per swap is the transport's contract.
    pub fn reduce(state: Option<&SwapState>, update: &SwapProgressUpdate) -> SwapState {
        match state {
            Some(held) if held.swap_id == update.swap_id => SwapState {
                swap_id: held.swap_id.clone(),
                current: update.event.clone(),
                previous: Some(held.current.clone()),
            },
            _ => SwapState {
                swap_id: update.swap_id.clone(),
                current: update.event.clone(),
                previous: None,
            },
        }
    }
}
