//! # landed-upgrade
//!
//! The evidence upgrade controller: attempts to attach additional external
//! evidence to a stored report. One external lookup per invocation, gated by
//! an atomic per-report cooldown that is checked before any I/O. Evidence is
//! append-only — an upgrade can add evidence, never remove it.

pub mod controller;
pub mod cooldown;
pub mod merge;
pub mod store;

pub use controller::{UpgradeContext, UpgradeController};
pub use store::InMemoryUpgradeStore;
