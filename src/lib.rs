//! An acceptor for ECMAScript regular expression patterns.
//!
//! Decides whether a pattern is syntactically valid, under either the strict
//! grammar of the `u` flag or the legacy grammar with its web-compatibility
//! relaxations. No matcher is built.
//!
//! # Example
//!
//! ```rust
//! use regexp_acceptor::{Options, accept, parse_literal};
//!
//! // Legacy mode reads a lone `{` as a literal; Unicode mode does not.
//! assert!(accept("a{", Options::default()));
//! assert!(!accept("a{", Options::new().unicode(true)));
//!
//! // Backreferences may point forward to groups defined later.
//! assert!(accept(r"\1(a)", Options::new().unicode(true)));
//!
//! let literal = parse_literal(r"/\p{Lu}+/u").unwrap();
//! assert!(accept(literal.pattern, literal.options(Options::default())));
//! ```

mod acceptor;
mod cursor;
mod grammar;
mod literal;
mod options;
mod production;
mod state;
pub mod unicode;
mod validator;

pub use acceptor::accept;
pub use literal::{LiteralError, RegexLiteral, parse_literal};
pub use options::{DEFAULT_MAX_NESTING, Options};
