//! Clavier Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Clavier keyboard
//! distance library. It includes:
//!
//! - **Geometry**: Key positions in the keyboard plane ([`geometry::Position`])
//! - **Metric**: Distance functions between positions ([`metric::Metric`])
//! - **Staggering**: Horizontal row offsets of physical keyboards ([`staggering::Staggering`])
//! - **Errors**: The error type raised by layout queries ([`error::LayoutError`])

pub mod error;
pub mod geometry;
pub mod metric;
pub mod staggering;

pub use error::LayoutError;
