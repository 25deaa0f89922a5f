//! Key Encapsulation Mechanisms (KEM)
//!
//! This crate implements the key material handling for the pqcrypt
//! post-quantum KEMs. The McEliece module carries public-key generation
//! for the code-based scheme; the generated key crosses this boundary as
//! an opaque byte blob for the transport layer to carry.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod mceliece;

// Re-exports
pub use mceliece::{McEliece8192128, McEliecePublicKey, McElieceSecretKey};
