//! Interaction kinds and the record of pairs each stage consumed.

use std::fmt;

use feynman_types::{ParticleName, ParticlePair};
use serde::{Deserialize, Serialize};

/// The four interaction categories, in classification priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    FlavorChange,
    Strong,
    Electromagnetic,
    Weak,
}

impl InteractionKind {
    /// Canonical stage order.
    pub const ALL: [InteractionKind; 4] = [
        Self::FlavorChange,
        Self::Strong,
        Self::Electromagnetic,
        Self::Weak,
    ];

    /// Symbol of the boson mediating this kind of vertex.
    pub fn mediator(&self) -> &'static str {
        match self {
            Self::FlavorChange => "W±",
            Self::Strong => "g",
            Self::Electromagnetic => "γ",
            Self::Weak => "Z",
        }
    }

    /// The mediator in TeX math, for diagram labels.
    pub fn mediator_tex(&self) -> &'static str {
        match self {
            Self::FlavorChange => r"W^\pm",
            Self::Strong => "g",
            Self::Electromagnetic => r"\gamma",
            Self::Weak => "Z",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FlavorChange => "flavor change",
            Self::Strong => "strong",
            Self::Electromagnetic => "electromagnetic",
            Self::Weak => "weak",
        };
        f.write_str(label)
    }
}

/// Charged-current flavor transitions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorChangePairs {
    pub quark_pairs: Vec<ParticlePair>,
    pub lepton_pairs: Vec<ParticlePair>,
}

/// Gluon-mediated quark/antiquark pairs in the final state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrongPairs {
    pub quark_pairs: Vec<ParticlePair>,
}

/// Photon vertices, one list per side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectromagneticPairs {
    pub initial_pairs: Vec<ParticlePair>,
    pub final_pairs: Vec<ParticlePair>,
}

/// Neutral-current pairs left over after the other stages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeakPairs {
    pub pairs: Vec<ParticlePair>,
}

/// Pairs produced by a single stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StagePairs {
    FlavorChange(FlavorChangePairs),
    Strong(StrongPairs),
    Electromagnetic(ElectromagneticPairs),
    Weak(WeakPairs),
}

impl StagePairs {
    pub fn kind(&self) -> InteractionKind {
        match self {
            Self::FlavorChange(_) => InteractionKind::FlavorChange,
            Self::Strong(_) => InteractionKind::Strong,
            Self::Electromagnetic(_) => InteractionKind::Electromagnetic,
            Self::Weak(_) => InteractionKind::Weak,
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &ParticlePair> + '_> {
        match self {
            Self::FlavorChange(p) => Box::new(p.quark_pairs.iter().chain(&p.lepton_pairs)),
            Self::Strong(p) => Box::new(p.quark_pairs.iter()),
            Self::Electromagnetic(p) => Box::new(p.initial_pairs.iter().chain(&p.final_pairs)),
            Self::Weak(p) => Box::new(p.pairs.iter()),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every pair consumed across the pipeline, grouped by interaction.
///
/// A particle instance appears in at most one pair of the whole record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub flavor_change: FlavorChangePairs,
    pub strong: StrongPairs,
    pub em: ElectromagneticPairs,
    pub weak: WeakPairs,
}

impl InteractionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one stage's pairs to the matching category.
    pub fn absorb(&mut self, pairs: StagePairs) {
        match pairs {
            StagePairs::FlavorChange(p) => {
                self.flavor_change.quark_pairs.extend(p.quark_pairs);
                self.flavor_change.lepton_pairs.extend(p.lepton_pairs);
            }
            StagePairs::Strong(p) => self.strong.quark_pairs.extend(p.quark_pairs),
            StagePairs::Electromagnetic(p) => {
                self.em.initial_pairs.extend(p.initial_pairs);
                self.em.final_pairs.extend(p.final_pairs);
            }
            StagePairs::Weak(p) => self.weak.pairs.extend(p.pairs),
        }
    }

    /// Pairs of one kind, flattened in recording order.
    pub fn pairs_of(&self, kind: InteractionKind) -> Vec<&ParticlePair> {
        match kind {
            InteractionKind::FlavorChange => self
                .flavor_change
                .quark_pairs
                .iter()
                .chain(&self.flavor_change.lepton_pairs)
                .collect(),
            InteractionKind::Strong => self.strong.quark_pairs.iter().collect(),
            InteractionKind::Electromagnetic => {
                self.em.initial_pairs.iter().chain(&self.em.final_pairs).collect()
            }
            InteractionKind::Weak => self.weak.pairs.iter().collect(),
        }
    }

    pub fn pair_count(&self) -> usize {
        InteractionKind::ALL
            .iter()
            .map(|kind| self.pairs_of(*kind).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pair_count() == 0
    }

    /// Kinds with at least one pair, in priority order.
    pub fn kinds(&self) -> Vec<InteractionKind> {
        InteractionKind::ALL
            .into_iter()
            .filter(|kind| !self.pairs_of(*kind).is_empty())
            .collect()
    }

    /// Every particle instance consumed by some pair.
    pub fn particles(&self) -> Vec<&ParticleName> {
        InteractionKind::ALL
            .iter()
            .flat_map(|kind| self.pairs_of(*kind))
            .flat_map(|pair| [&pair.0, &pair.1])
            .collect()
    }
}
