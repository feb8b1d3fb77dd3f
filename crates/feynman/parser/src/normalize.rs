//! Symbol → canonical-name resolution.

use std::collections::HashMap;

use feynman_types::{ParticleName, ParticleTable, Reaction};
use tracing::debug;

use crate::errors::{ParseError, ParseResult};
use crate::lexer::Token;
use crate::parser::{parse_reaction, ParsedReaction};

/// Resolves user-facing spellings to canonical particle names.
///
/// A token is looked up as a symbol first, then as an alias, then as a
/// canonical name, so `"Z"` reaches `"Z boson"` through its alias while a
/// symbol that happens to equal another particle's alias still wins.
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    index: HashMap<String, ParticleName>,
}

impl Normalizer {
    pub fn from_table(table: &ParticleTable) -> Self {
        let mut index = HashMap::new();
        // Later inserts override earlier ones: names < aliases < symbols.
        for (name, _) in table.iter() {
            index.insert(name.to_string(), name.clone());
        }
        for (name, attrs) in table.iter() {
            for alias in &attrs.aliases {
                index.insert(alias.clone(), name.clone());
            }
        }
        for (name, attrs) in table.iter() {
            index.insert(attrs.symbol.clone(), name.clone());
        }
        Self { index }
    }

    /// Canonical name for one spelling.
    pub fn resolve(&self, spelling: &str) -> Option<&ParticleName> {
        self.index.get(spelling)
    }

    /// Resolve every token of a parsed reaction.
    pub fn normalize(&self, parsed: &ParsedReaction) -> ParseResult<Reaction> {
        let initial = self.resolve_tokens(&parsed.initial)?;
        let final_state = self.resolve_tokens(&parsed.final_state)?;
        let reaction = Reaction {
            initial_state: initial,
            final_state,
        };
        debug!(reaction = %reaction, "Reaction normalized");
        Ok(reaction)
    }

    /// Parse and normalize in one step.
    pub fn parse(&self, input: &str) -> ParseResult<Reaction> {
        self.normalize(&parse_reaction(input)?)
    }

    fn resolve_tokens(&self, tokens: &[Token]) -> ParseResult<Vec<ParticleName>> {
        tokens
            .iter()
            .map(|token| {
                self.resolve(&token.text)
                    .cloned()
                    .ok_or_else(|| ParseError::UnknownSymbol {
                        symbol: token.text.clone(),
                        col: token.col,
                    })
            })
            .collect()
    }
}
