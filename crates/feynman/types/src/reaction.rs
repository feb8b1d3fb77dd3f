//! Reactions, sides and consumed particle pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TypesError, TypesResult};
use crate::particle::ParticleName;
use crate::table::AttributeTable;

/// Deepest composite nesting `expand_composites` will follow.
pub const MAX_COMPOSITE_DEPTH: usize = 4;

/// One side of a reaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Initial,
    Final,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => f.write_str("initial"),
            Self::Final => f.write_str("final"),
        }
    }
}

/// An `initial -> final` transformation over canonical particle names.
///
/// Multiplicity matters and order is preserved; matching tie-breaks depend on it.
/// The same shape is used for the interacting subset and for unclassified
/// remainders, which are simply partial reactions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reaction {
    #[serde(rename = "initial")]
    pub initial_state: Vec<ParticleName>,
    #[serde(rename = "final")]
    pub final_state: Vec<ParticleName>,
}

impl Reaction {
    pub fn new<I, F, N, M>(initial: I, final_state: F) -> Self
    where
        I: IntoIterator<Item = N>,
        F: IntoIterator<Item = M>,
        N: Into<ParticleName>,
        M: Into<ParticleName>,
    {
        Self {
            initial_state: initial.into_iter().map(Into::into).collect(),
            final_state: final_state.into_iter().map(Into::into).collect(),
        }
    }

    pub fn side(&self, side: Side) -> &[ParticleName] {
        match side {
            Side::Initial => &self.initial_state,
            Side::Final => &self.final_state,
        }
    }

    /// A decay has exactly one initial particle.
    pub fn is_decay(&self) -> bool {
        self.initial_state.len() == 1
    }

    pub fn is_empty(&self) -> bool {
        self.initial_state.is_empty() && self.final_state.is_empty()
    }

    /// Total particle count over both sides.
    pub fn len(&self) -> usize {
        self.initial_state.len() + self.final_state.len()
    }

    /// Replace every composite particle by its constituents, recursively.
    ///
    /// Elementary particles pass through unchanged and order is preserved, so
    /// `proton -> ...` becomes `up up down -> ...`.
    pub fn expand_composites(&self, table: &dyn AttributeTable) -> TypesResult<Reaction> {
        Ok(Reaction {
            initial_state: expand_side(&self.initial_state, table)?,
            final_state: expand_side(&self.final_state, table)?,
        })
    }
}

fn expand_side(names: &[ParticleName], table: &dyn AttributeTable) -> TypesResult<Vec<ParticleName>> {
    let mut expanded = Vec::with_capacity(names.len() * 3);
    for name in names {
        expand_into(name, table, 0, &mut expanded)?;
    }
    Ok(expanded)
}

fn expand_into(
    name: &ParticleName,
    table: &dyn AttributeTable,
    depth: usize,
    out: &mut Vec<ParticleName>,
) -> TypesResult<()> {
    if depth > MAX_COMPOSITE_DEPTH {
        return Err(TypesError::CompositeTooDeep(name.clone()));
    }
    let attrs = table.get(name)?;
    if attrs.content.is_empty() {
        out.push(name.clone());
        return Ok(());
    }
    for constituent in &attrs.content {
        expand_into(constituent, table, depth + 1, out)?;
    }
    Ok(())
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |names: &[ParticleName]| {
            names
                .iter()
                .map(ParticleName::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(f, "{} -> {}", join(&self.initial_state), join(&self.final_state))
    }
}

/// Two particle instances consumed together by one interaction vertex.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticlePair(pub ParticleName, pub ParticleName);

impl ParticlePair {
    pub fn new(first: impl Into<ParticleName>, second: impl Into<ParticleName>) -> Self {
        Self(first.into(), second.into())
    }

    pub fn first(&self) -> &ParticleName {
        &self.0
    }

    pub fn second(&self) -> &ParticleName {
        &self.1
    }
}

impl fmt::Display for ParticlePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
