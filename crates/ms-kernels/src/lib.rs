//! # ms-kernels
//!
//! Kernels, metrics and models implementing the tunable component contract of
//! `ms-params`, plus reference search-space trees built from them.

pub mod kernels;
pub mod models;
pub mod scenarios;

pub use kernels::{DistantSegmentsKernel, GaussianKernel, MinkowskiMetric, PowerKernel};
pub use models::SvmModel;
pub use scenarios::Templates;
