//! Conservation laws and the violations they report.

use std::fmt;

use feynman_types::rational::serde_rational;
use feynman_types::{LeptonFlavor, Rational64};
use serde::{Deserialize, Serialize};

/// A conserved quantity checked by the validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "law", content = "flavor")]
pub enum ConservationLaw {
    Charge,
    BaryonNumber,
    /// Lepton number of a single family
    LeptonNumber(LeptonFlavor),
    /// Energy availability for a decay
    Mass,
}

impl fmt::Display for ConservationLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Charge => f.write_str("charge"),
            Self::BaryonNumber => f.write_str("baryon number"),
            Self::LeptonNumber(flavor) => write!(f, "{} lepton number", flavor),
            Self::Mass => f.write_str("mass"),
        }
    }
}

/// A summed quantity on one side of a reaction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// Quantum numbers, summed exactly
    Exact(#[serde(with = "serde_rational")] Rational64),
    /// Mass in MeV
    Mass(f64),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(value) => write!(f, "{}", value),
            Self::Mass(value) => write!(f, "{:.3} MeV", value),
        }
    }
}

/// One failed conservation check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub law: ConservationLaw,
    /// Sum over the initial state
    pub initial: Quantity,
    /// Sum over the final state
    #[serde(rename = "final")]
    pub final_state: Quantity,
}

impl Violation {
    pub fn new(law: ConservationLaw, initial: Quantity, final_state: Quantity) -> Self {
        Self {
            law,
            initial,
            final_state,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relation = if self.law == ConservationLaw::Mass {
            "<"
        } else {
            "!="
        };
        write!(
            f,
            "Process FORBIDDEN due to {} conservation: {} {} {}",
            self.law, self.initial, relation, self.final_state
        )
    }
}
