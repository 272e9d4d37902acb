//! Helpers for turning failed submissions into readable, colorized messages.

pub mod instruction_error;
