//! Test fixtures for trip-planner.
//!
//! Provides:
//! - Real Las Vegas addresses for trip requests
//! - Canned optimizer payloads, well-formed and broken
//! - A scripted stub optimizer

#![allow(dead_code)]

pub mod addresses;
pub mod payloads;
pub mod stub;

pub use addresses::*;
pub use payloads::*;
pub use stub::*;
