//! Structures, enumerations and unions of the protocol data model.
//!
//! Submodules group records by feature area. Everything is re-exported flat
//! from here so callers name types the way the protocol does.

mod base;
mod basic;
mod client_capabilities;
mod completion;
mod diagnostics;
mod document;
mod editing;
mod enums;
mod hints;
mod lifecycle;
mod navigation;
mod server_capabilities;
mod window;
mod workspace;

pub use base::*;
pub use basic::*;
pub use client_capabilities::*;
pub use completion::*;
pub use diagnostics::*;
pub use document::*;
pub use editing::*;
pub use enums::*;
pub use hints::*;
pub use lifecycle::*;
pub use navigation::*;
pub use server_capabilities::*;
pub use window::*;
pub use workspace::*;

#[cfg(test)]
mod tests;
