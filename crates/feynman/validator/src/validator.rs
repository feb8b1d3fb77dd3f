use feynman_types::{AttributeTable, ParticleAttributes, ParticleName, Reaction};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::checks::{
    BaryonConservation, ChargeConservation, ConservationCheck, LeptonConservation,
    MassConservation,
};
use crate::error::{ValidatorError, ValidatorResult};
use crate::law::Violation;

/// Configuration for the conservation validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Run the decay mass check (default: true)
    pub check_mass: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self { check_mass: true }
    }
}

/// Runs every conservation check over a reaction and collects all violations.
pub struct ConservationValidator {
    checks: Vec<Box<dyn ConservationCheck>>,
    config: ValidatorConfig,
}

impl ConservationValidator {
    /// Charge, baryon number and lepton number, plus mass unless disabled.
    pub fn new(config: ValidatorConfig) -> Self {
        let mut checks: Vec<Box<dyn ConservationCheck>> = vec![
            Box::new(ChargeConservation),
            Box::new(BaryonConservation),
            Box::new(LeptonConservation),
        ];
        if config.check_mass {
            checks.push(Box::new(MassConservation));
        }
        Self { checks, config }
    }

    /// Append an extra check after the standard ones.
    pub fn add_check(&mut self, check: Box<dyn ConservationCheck>) {
        self.checks.push(check);
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Names of the checks that will run, in order.
    pub fn check_names(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Validate a reaction against `table`.
    ///
    /// Returns an empty list iff every law holds. Every particle is resolved
    /// before any sum is taken, so an unknown name aborts with
    /// [`ValidatorError::UnknownParticle`] and no partial verdict.
    pub fn validate(
        &self,
        reaction: &Reaction,
        table: &dyn AttributeTable,
    ) -> ValidatorResult<Vec<Violation>> {
        let initial = resolve(&reaction.initial_state, table)?;
        let final_state = resolve(&reaction.final_state, table)?;

        let mut violations = Vec::new();
        for check in &self.checks {
            let found = check.check(&initial, &final_state);
            debug!(check = check.name(), violations = found.len(), "Conservation check evaluated");
            violations.extend(found);
        }

        for violation in &violations {
            warn!(
                reaction = %reaction,
                law = %violation.law,
                initial = %violation.initial,
                final_state = %violation.final_state,
                "Conservation law violated"
            );
        }
        Ok(violations)
    }
}

impl Default for ConservationValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

fn resolve<'t>(
    names: &[ParticleName],
    table: &'t dyn AttributeTable,
) -> ValidatorResult<Vec<&'t ParticleAttributes>> {
    names
        .iter()
        .map(|name| {
            table
                .lookup(name)
                .ok_or_else(|| ValidatorError::UnknownParticle(name.clone()))
        })
        .collect()
}
