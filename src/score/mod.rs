//! Score accumulation.

mod tracker;

pub use tracker::ScoreTracker;
