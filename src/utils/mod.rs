// src/utils/mod.rs

pub mod crypto;

pub use crypto::preview_secret;
