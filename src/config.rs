//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive a scan (library layout,
//! filters, output location) and helpers to load them from disk and env.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
