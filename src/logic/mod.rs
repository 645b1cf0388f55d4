pub mod extract;
pub mod fusion;
pub mod grid;
pub mod pipeline;
pub mod rating;
pub mod section;
pub mod units;

pub use pipeline::{assess, ConditionsInputs};
pub use rating::RatingEngine;
