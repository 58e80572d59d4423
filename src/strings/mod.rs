//! # Strings Module
//!
//! Centralizes user-facing strings: bot replies and console text.
//! Ensures consistency in messaging and easier localization/updates.

pub mod help;
pub mod messages;
