//! Parser: `<symbol>+ -> <symbol>+`.

use feynman_types::Side;

use crate::errors::{ParseError, ParseResult};
use crate::lexer::{Lexer, Token, TokenKind};

/// A syntactically valid reaction whose symbols are not yet resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedReaction {
    pub initial: Vec<Token>,
    pub final_state: Vec<Token>,
}

impl ParsedReaction {
    /// Raw symbols of one side.
    pub fn symbols(&self, side: Side) -> Vec<&str> {
        let tokens = match side {
            Side::Initial => &self.initial,
            Side::Final => &self.final_state,
        };
        tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Parse a reaction string such as `"e+ e- -> mu+ mu-"`.
///
/// Exactly one arrow is required and neither side may be empty.
pub fn parse_reaction(input: &str) -> ParseResult<ParsedReaction> {
    let tokens = Lexer::new(input).tokenize();

    let arrows = tokens.iter().filter(|t| t.kind == TokenKind::Arrow).count();
    match arrows {
        0 => return Err(ParseError::MissingArrow),
        1 => {}
        count => return Err(ParseError::MultipleArrows { count }),
    }

    let mut initial = Vec::new();
    let mut final_state = Vec::new();
    let mut seen_arrow = false;
    for token in tokens {
        match (token.kind, seen_arrow) {
            (TokenKind::Arrow, _) => seen_arrow = true,
            (TokenKind::Symbol, false) => initial.push(token),
            (TokenKind::Symbol, true) => final_state.push(token),
        }
    }

    if initial.is_empty() {
        return Err(ParseError::EmptySide(Side::Initial));
    }
    if final_state.is_empty() {
        return Err(ParseError::EmptySide(Side::Final));
    }

    Ok(ParsedReaction {
        initial,
        final_state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_parse() {
        let parsed = parse_reaction("e+ e- -> mu+ mu-").unwrap();
        assert_eq!(parsed.symbols(Side::Initial), vec!["e+", "e-"]);
        assert_eq!(parsed.symbols(Side::Final), vec!["mu+", "mu-"]);
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let parsed = parse_reaction("   e+   e-   ->   mu+   mu-   ").unwrap();
        assert_eq!(parsed.symbols(Side::Initial), vec!["e+", "e-"]);
        assert_eq!(parsed.symbols(Side::Final), vec!["mu+", "mu-"]);
    }

    #[test]
    fn arrow_without_spaces() {
        let parsed = parse_reaction("n->p e- nu_e~").unwrap();
        assert_eq!(parsed.symbols(Side::Initial), vec!["n"]);
        assert_eq!(parsed.symbols(Side::Final), vec!["p", "e-", "nu_e~"]);
    }

    #[test]
    fn missing_arrow() {
        assert_eq!(parse_reaction("e+ e- mu+ mu-"), Err(ParseError::MissingArrow));
    }

    #[test]
    fn multiple_arrows() {
        assert_eq!(
            parse_reaction("a -> b -> c"),
            Err(ParseError::MultipleArrows { count: 2 })
        );
    }

    #[test]
    fn empty_sides() {
        assert_eq!(parse_reaction("-> mu-"), Err(ParseError::EmptySide(Side::Initial)));
        assert_eq!(parse_reaction("mu- ->  "), Err(ParseError::EmptySide(Side::Final)));
    }
}
