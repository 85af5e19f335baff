//! Command-line front end for Easel.
//!
//! The binary in `main.rs` is a thin wrapper over [`cli`].

pub mod cli;
