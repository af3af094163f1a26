//! Layout phase: coordinate re-basing and canvas sizing.

pub mod bounds;
pub mod normalize;

pub use bounds::compute_bounds;
pub use normalize::normalize;
