//! # IO Module
//!
//! Interface layer between API consumers and the domain: translates HTTP
//! requests into domain commands and domain results into the DTOs of the
//! `shared` crate.

pub mod rest;

pub use rest::*;
