//! Command implementations behind the `actidx` binary.

pub mod commands;

pub use commands::{apply, register_user, replay, Op, Outcome};
