//! Splice CLI library.
//!
//! This crate provides the command implementations behind the `splice` binary:
//! showing, inspecting, exporting, importing, and verifying `.splice` pattern files.

pub mod commands;
