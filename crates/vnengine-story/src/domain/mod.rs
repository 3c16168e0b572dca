//! Domain model for the Story context.

pub mod scene;
pub mod story;
