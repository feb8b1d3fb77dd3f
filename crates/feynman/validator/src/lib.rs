//! Feynman Validator - conservation-law verdicts for particle reactions.
//!
//! The validator sums each conserved quantity over the initial and final
//! states and reports *every* violated law; it never stops at the first one.
//!
//! | law | quantity | applies to |
//! |-----|----------|------------|
//! | charge | Σ Q (exact rational) | all reactions |
//! | baryon number | Σ B (exact rational) | all reactions |
//! | lepton number | Σ Lₑ, Σ L_μ, Σ L_τ, each separately | all reactions |
//! | mass | Σ m_final ≤ m_initial | decays (one initial particle) only |
//!
//! A particle absent from the attribute table is an error, not a violation:
//! the sums cannot be computed, so validation of that reaction is aborted.

pub mod checks;
pub mod error;
pub mod law;
pub mod validator;

pub use checks::{
    BaryonConservation, ChargeConservation, ConservationCheck, LeptonConservation,
    MassConservation,
};
pub use error::{ValidatorError, ValidatorResult};
pub use law::{ConservationLaw, Quantity, Violation};
pub use validator::{ConservationValidator, ValidatorConfig};
