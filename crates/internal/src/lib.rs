//! Internal utilities shared across the pqcrypt crates
//!
//! This crate provides constant-time primitives and byte-order helpers used
//! by the algorithm implementations. Nothing here is a public API guarantee;
//! downstream users should depend on the algorithm crates instead.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
