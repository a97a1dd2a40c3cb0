//! Field decode adapters for semi-structured (JSON) data.
//!
//! [`wrap::Defaulted`] substitutes a provider fallback when a field is absent
//! or `null`; [`wrap::Absolute`] keeps the magnitude of a signed number. Both
//! work as `serde` field types and through the explicit [`wrap::Record`] view.

/// Field adapters, default providers, node paths, and record decoding.
pub mod wrap;
