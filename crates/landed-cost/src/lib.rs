//! # landed-cost
//!
//! Combines unit price, freight, duty, and fees — each carrying p10/p50/p90
//! ranges — into the *standard* and *conservative* landed-cost scenarios.

pub mod evaluator;

pub use evaluator::{evaluate, PriceBounds};
