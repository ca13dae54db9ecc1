//! coder/mod.rs
//! Canonical static prefix-code symbol coder.
//!
//! Design notes:
//! - Every coded stream embeds a 264-byte table: one canonical code
//!   length per symbol plus the symbol count. Codes are reassigned
//!   from lengths on both sides, so the coder needs no shared tree
//!   tie-breaking and the tree itself is never serialised.
//! - The exact symbol histogram drives the length derivation on
//!   encode only.

pub mod bitio;
pub mod canonical;
pub mod decode;
pub mod encode;
pub mod tree;

pub use decode::decode;
pub use encode::encode;
