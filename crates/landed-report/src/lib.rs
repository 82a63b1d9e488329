//! # landed-report
//!
//! Composes inference, cost, and risk outputs into one immutable-per-version
//! `Report` value plus a prioritized next-action list. Assembly is a pure
//! function of its context: same signals and evidence in, same report out
//! (modulo the id minted for a first derivation).

pub mod actions;
pub mod assembler;

pub use assembler::{AssembleContext, ReportAssembler};
