//! Directives module - Locate and build `#include` directives in C/C++ text
//!
//! Provides:
//! - text: Source text view with memoized keyword checks
//! - plan: Insertion offset selection
//! - normalize: Include token expansion
//! - splice: Inserting a directive into source text

pub mod normalize;
pub mod plan;
pub mod splice;
pub mod text;
