//! Parameter sets for the pqcrypt library
//!
//! This crate is a constants-only dependency shared by the algorithm and KEM
//! crates. It carries no code beyond parameter structures and their values.

#![no_std]

pub mod pqc;
