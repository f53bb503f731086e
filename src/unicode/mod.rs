//! Unicode character data needed by the grammar.

pub mod ident;
pub mod properties;
