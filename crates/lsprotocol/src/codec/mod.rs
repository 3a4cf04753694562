//! JSON encoding primitives shared by every schema type.
//!
//! - [`strict`] decodes a buffered value while rejecting undeclared keys.
//! - [`nullable`] keeps absent and `null` apart for optional fields.
//! - [`Tuple`] encodes a fixed pair as a two-element array.
//!
//! Union decoding lives in the `lsp_union!` macro and calls into `union`.

pub mod nullable;
pub mod strict;
mod tuple;
pub(crate) mod union;

pub use tuple::Tuple;

#[cfg(test)]
mod tests;
