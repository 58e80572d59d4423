//! # Domain Layer
//!
//! Core definitions, types, and traits of the dialogue framework.
//! Independent of any concrete featurizer or responder, serving as the contract for other layers.

pub mod action;
pub mod config;
pub mod error;
pub mod message;
pub mod responder;
pub mod response;
pub mod traits;
pub mod types;
