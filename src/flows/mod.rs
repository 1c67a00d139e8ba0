//! Flows module - End-to-end commands built from the directive primitives
//!
//! Provides:
//! - insert: Read a file, place an include, write it back

pub mod insert;
