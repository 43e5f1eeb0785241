//! Voice-over rate quoting: a static rate catalog, a pure resolution engine
//! turning (category, sub-type, parameters) into price ranges, and a cart
//! that accumulates resolved quotes into a running total.

pub mod config;
pub mod error;
pub mod quoting;
pub mod telemetry;
