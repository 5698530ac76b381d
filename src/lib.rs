//! An immediate-execution calculator with a bounded, recallable history.
//!
//! [`calculator`] holds the state machine and has no I/O. [`input`],
//! [`display`] and [`session`] connect it to a keyboard-style input stream
//! and a display surface.

pub mod calculator;
pub mod clipboard;
pub mod config;
pub mod display;
pub mod input;
pub mod session;
