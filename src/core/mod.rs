//! Core module - Shared infrastructure for the add-include flow

pub mod error;
pub mod file_io;
pub mod model;
pub mod render;
pub mod util;
