//! Application services for the Story context.

pub mod manifest;
pub mod setup;
pub mod validation;
