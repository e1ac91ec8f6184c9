pub mod outcome;
pub mod scoring;

pub use scoring::{rank, score_crop};
