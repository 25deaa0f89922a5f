//! Parameters for post-quantum cryptographic schemes

pub mod mceliece;
