//! Remote Service Wrappers
//!
//! Frontend bindings to outbound HTTP calls, organized by domain.

mod quote;

pub use quote::*;
