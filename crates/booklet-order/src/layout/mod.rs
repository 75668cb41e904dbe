//! Layout calculation for booklet printing
//!
//! This module handles the page ordering for a bifold booklet:
//! - Logical page sequence (flyleaves, source pages, padding)
//! - Sheet ordering (which logical page goes in which slot)
//! - Result types consumed by document reassembly

mod order;
mod sequence;
mod types;

pub use order::*;
pub use sequence::*;
pub use types::*;
