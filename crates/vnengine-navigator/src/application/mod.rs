//! Application services for the Navigation context.

pub mod navigator;
