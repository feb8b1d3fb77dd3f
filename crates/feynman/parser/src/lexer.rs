//! Lexer: splits a reaction string into particle symbols and the arrow.
//!
//! Symbols are runs of non-whitespace characters. The arrow `->` ends a
//! symbol even without surrounding whitespace, so `e-->mu-` lexes as
//! `e-`, `->`, `mu-`.

/// A token produced by the lexer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The raw text of the token
    pub text: String,
    /// Column number (1-based, in characters)
    pub col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, col: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            col,
        }
    }
}

/// Token types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Symbol,
    Arrow,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symbol => write!(f, "symbol"),
            Self::Arrow => write!(f, "->"),
        }
    }
}

/// Lexer for reaction strings
pub struct Lexer {
    input: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    /// Tokenize the entire input. Lexing itself cannot fail.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            if self.pos >= self.input.len() {
                break;
            }
            tokens.push(self.next_token());
        }
        tokens
    }

    fn next_token(&mut self) -> Token {
        let col = self.pos + 1;
        if self.at_arrow() {
            self.pos += 2;
            return Token::new(TokenKind::Arrow, "->", col);
        }

        let mut text = String::new();
        while self.pos < self.input.len() && !self.input[self.pos].is_whitespace() && !self.at_arrow() {
            text.push(self.input[self.pos]);
            self.pos += 1;
        }
        Token::new(TokenKind::Symbol, text, col)
    }

    fn at_arrow(&self) -> bool {
        self.input.get(self.pos) == Some(&'-') && self.input.get(self.pos + 1) == Some(&'>')
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() && self.input[self.pos].is_whitespace() {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<(TokenKind, String, usize)> {
        Lexer::new(input)
            .tokenize()
            .into_iter()
            .map(|t| (t.kind, t.text, t.col))
            .collect()
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(
            lex("e+ e- -> mu+ mu-"),
            vec![
                (TokenKind::Symbol, "e+".into(), 1),
                (TokenKind::Symbol, "e-".into(), 4),
                (TokenKind::Arrow, "->".into(), 7),
                (TokenKind::Symbol, "mu+".into(), 10),
                (TokenKind::Symbol, "mu-".into(), 14),
            ]
        );
    }

    #[test]
    fn arrow_glued_to_symbols() {
        let kinds: Vec<_> = lex("e-->mu-").into_iter().map(|(k, text, _)| (k, text)).collect();
        assert_eq!(
            kinds,
            vec![
                (TokenKind::Symbol, "e-".to_string()),
                (TokenKind::Arrow, "->".to_string()),
                (TokenKind::Symbol, "mu-".to_string()),
            ]
        );
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(lex("   \t ").is_empty());
    }
}
