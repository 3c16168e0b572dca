//! VN Engine core: shared contracts.
//!
//! This crate defines the error taxonomy and the collaborator traits that the
//! story model, the navigator and the front-ends agree on. It contains no
//! narrative logic.

pub mod assets;
pub mod clock;
pub mod error;
pub mod persistence;
pub mod presentation;
pub mod translation;
