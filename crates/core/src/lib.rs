//! Core library for meleetools
//!
//! This crate implements the **Functional Core** of the meleetools application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`meleetools_core`** (this crate): Pure transformation functions with zero I/O
//! - **`meleetools`**: HTTP transport, configuration and the command line (the Imperative Shell)
//!
//! Every function in this crate is deterministic and free of side effects, so
//! reports are tested with fixture data and no HTTP mocking.
//!
//! # Module Organization
//!
//! - [`types`]: Typed wire schema for Melee.gg API responses
//! - [`identity`]: Player handle and decklist resolution shared by all reports
//! - [`report`]: Participants, pairings and standings builders and renderers
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use meleetools_core::report::standings::{build_standings_report, render_standings};
//!
//! let report = build_standings_report(&standings, &tournament);
//! print!("{}", render_standings(&report));
//! ```

pub mod identity;
pub mod report;
pub mod types;
