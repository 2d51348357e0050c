//! Interactive shell
//!
//! This module contains the read-dispatch-print loop that drives a
//! [`Session`](crate::session::Session) from text input.

pub mod core;

pub use self::core::Shell;
