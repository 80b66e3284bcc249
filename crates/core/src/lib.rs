//! Domain types and pure logic for the packrat catalog.
//!
//! This crate has no database or HTTP dependencies so the policy code
//! (location resolution, search matching, image wire format) can be
//! exercised by plain unit tests and reused by any future tooling.

pub mod error;
pub mod image;
pub mod location;
pub mod types;
