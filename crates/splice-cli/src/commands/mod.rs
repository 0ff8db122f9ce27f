//! CLI command implementations

pub mod export;
pub mod import;
pub mod inspect;
pub mod json_output;
pub mod show;
pub mod verify;
