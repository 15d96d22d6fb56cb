//! Browser glue: DOM events, dialogs, storage, and entropy.
//!
//! Everything that needs `web_sys` is behind the `csr` feature so the crate
//! still builds and tests natively.

pub mod dom;
#[cfg(feature = "csr")]
pub mod host_controls;
pub mod rng;
#[cfg(feature = "csr")]
pub mod storage;
