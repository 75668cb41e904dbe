mod booklet;
pub mod constants;
pub mod layout;
mod options;
mod stats;
mod types;

pub use booklet::{compute, compute_with_options};
pub use layout::{BookletLayout, PagePair, Placement, Sheet};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
