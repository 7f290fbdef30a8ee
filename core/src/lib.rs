//! NEDC Core: the deterministic preprocessing pipeline shared by every
//! scoring engine.
//!
//! # Module Dependency Direction
//!
//! `model` <- `label_map` <- `augment` <- `epoch`, with `csv_bi` and
//! `config` depending only on `model`/`label_map`/`epoch`.
//!
//! One-way only. No cycles. This crate is pure: no I/O beyond parsing an
//! already-read string ([`csv_bi::parse`]), no process-wide mutable state,
//! and no panics except the one documented internal-invariant case in
//! [`epoch::compress_pairs`].

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod augment;
pub mod config;
pub mod csv_bi;
pub mod epoch;
pub mod error;
pub mod label_map;
pub mod model;
