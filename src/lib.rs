//! # pqcrypt
//!
//! A modular post-quantum cryptographic library built on binary Goppa codes.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pqcrypt = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pqcrypt-algorithms`]: Core primitives (field arithmetic, matrix reduction)
//! - [`pqcrypt-kem`]: Key Encapsulation Mechanisms
//! - [`pqcrypt-params`]: Parameter sets
//! - [`pqcrypt-internal`]: Internal constant-time utilities

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use pqcrypt_algorithms as algorithms;
pub use pqcrypt_internal as internal;
pub use pqcrypt_kem as kem;
pub use pqcrypt_params as params;

/// Common imports for pqcrypt users
pub mod prelude {
    pub use crate::kem::mceliece::{McEliece8192128, McEliecePublicKey, McElieceSecretKey};
    pub use rand::{CryptoRng, RngCore};
    pub use zeroize::Zeroize;
}
