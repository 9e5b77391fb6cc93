//! Estimation math: surface areas, material and labor costs, and the
//! cumulative overhead/profit/tax chain that turns them into a priced
//! project total.

pub mod area;
pub mod common;
pub mod estimator;

pub use estimator::ProjectEstimator;
