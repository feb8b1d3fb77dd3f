//! Feynman Parser - turns `"e+ e- -> mu+ mu-"` into a [`Reaction`] of
//! canonical particle names.
//!
//! [`parse_reaction`] checks the grammar only; [`Normalizer`] resolves each
//! symbol against a [`ParticleTable`](feynman_types::ParticleTable).
//!
//! [`Reaction`]: feynman_types::Reaction

pub mod errors;
pub mod lexer;
pub mod normalize;
pub mod parser;

pub use errors::{ParseError, ParseResult};
pub use lexer::{Lexer, Token, TokenKind};
pub use normalize::Normalizer;
pub use parser::{parse_reaction, ParsedReaction};
