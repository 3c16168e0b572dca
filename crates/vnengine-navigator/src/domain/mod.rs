//! Domain model for the Navigation context.

pub mod history;
pub mod input;
