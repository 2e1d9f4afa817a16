//! Internal test tree for cross-module flows.
//!
//! - `integration.rs`: end-to-end scenarios driving input handling, the
//!   command controller, and the physics step together
//! - `helpers.rs`: factory functions shared by the scenarios

mod helpers;
mod integration;

pub use helpers::*;
