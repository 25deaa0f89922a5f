//! Cryptographic primitives for the pqcrypt library
//!
//! This crate implements the mathematical machinery behind the pqcrypt
//! schemes. The `code` module carries the primitives for code-based
//! cryptography: binary extension-field arithmetic, constant-time sorting,
//! Goppa polynomial evaluation, and dense bit-matrix reduction.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod code;
pub mod error;

pub use error::{Error, Result};
