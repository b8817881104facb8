//! x402-ui - Shared UI components for the x402 front end
//!
//! Contains the brand logo and the class-merging and composition helpers
//! it is built from. Components here are pure views; routing is provided
//! by the host app.

pub mod class_names;
pub mod components;

pub use class_names::cn;
pub use components::*;
