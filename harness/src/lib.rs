//! NEDC Harness: per-file driving, corpus aggregation, report rendering,
//! and the parity harness, all built on `nedc_core` and `nedc_scorers`.
//!
//! # Module Dependency Direction
//!
//! `driver` (runs the five scorers over one file pair) <- `corpus` (folds
//! the driver over an ordered list of files) <- `aggregate` (owned by
//! `corpus`, but usable standalone) <- `report` (renders an `Aggregator`).
//! `parity` and `canon` are independent leaves used by `report` and by
//! integration tests. No module here implements scoring logic itself —
//! that lives entirely in `nedc_scorers`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aggregate;
pub mod canon;
pub mod corpus;
pub mod driver;
pub mod parity;
pub mod report;
