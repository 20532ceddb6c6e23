// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod config;
pub(crate) mod driver;
pub(crate) mod signs;

// estimators
pub mod derivative;

// algorithms
pub mod bisection;
pub mod false_position;
pub mod fixed_point;
pub mod newton;
pub mod secant;
