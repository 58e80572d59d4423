//! # Infrastructure Layer
//!
//! Concrete collaborators: NLU pipeline stages and runtime-backed effect handling.

pub mod nlu;
pub mod timer;
