//! Text-level HTML transforms used by the assembler.
//!
//! Everything in here operates on markup as plain text with small,
//! deliberately tolerant scanners. Pages and partials are authored by hand;
//! the transforms must survive whatever formatting they arrive in, and must
//! never touch bytes outside the element or attribute they target.

pub mod locate;
pub mod rewrite;
pub mod scripts;
pub mod splice;
