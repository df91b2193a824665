// wallet-core/src/api/mod.rs

//! Flat function API cho front-end bindings (FFI / bridge)

#[allow(clippy::module_inception)]
mod api;

pub use api::*;
