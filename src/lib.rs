//! Client side core for a desktop GUI driving an xmr-btc atomic swap daemon.
//!
//! The daemon runs the actual protocol; this crate only mirrors it. It decodes
//! the daemon's push channel (progress events and log lines), keeps a two-deep
//! event history per displayed swap, and derives the stepper state the GUI
//! renders from it. Commands back to the daemon (resume, suspend,
//! cancel-refund) go over plain HTTP and are fire-and-forget from the
//! projection's point of view.
pub mod error;
pub mod event;
pub mod logs;
pub mod state;
pub mod stepper;
pub mod daemon;
pub mod session;
pub mod util;
