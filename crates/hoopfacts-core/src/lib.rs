//! # hoopfacts-core
//!
//! Core types, configuration, and error handling for the hoopfacts skill.

pub mod config;
pub mod error;
pub mod locale;
pub mod request;
pub mod response;
