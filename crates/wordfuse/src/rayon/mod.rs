//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel batch encoding.

mod rayon_encoder;

pub use rayon_encoder::ParallelRayonEncoder;
