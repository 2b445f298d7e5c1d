//! Spring-based animation of the sheet offset.
//!
//! The sheet has exactly one animated property, its vertical offset. It is
//! moved by a [`SpringTransition`] that the host steps once per frame.

mod spring;
mod transition;

pub use spring::{SpringConfig, SpringState};
pub use transition::{REST_DISTANCE, REST_VELOCITY, SpringTransition};
