use feynman_types::{AttributeTable, ParticleName, Reaction};
use feynman_validator::{ConservationValidator, Violation};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ClassifierError, ClassifierResult};
use crate::record::{InteractionKind, InteractionRecord};
use crate::spectator::separate;
use crate::stages::canonical_stages;
use crate::traits::InteractionStage;

/// Configuration for the classifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Skip every matcher when the reaction violates a conservation law
    /// (default: false). The whole interacting set is then the remainder.
    pub skip_forbidden: bool,
}

/// Everything `classify` learned about one reaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// The reaction as given
    pub reaction: Reaction,
    /// The reaction with composites replaced by their constituents
    pub elemental: Reaction,
    /// Conservation laws the reaction violates (empty when allowed)
    pub violations: Vec<Violation>,
    /// Elemental particles unchanged on both sides
    pub spectators: Vec<ParticleName>,
    pub interactions: InteractionRecord,
    /// Interacting particles no stage consumed
    pub remainder: Reaction,
}

impl ClassificationReport {
    /// No conservation law is violated.
    pub fn is_allowed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Every interacting particle ended up in some pair.
    pub fn is_fully_classified(&self) -> bool {
        self.remainder.is_empty()
    }

    /// Interaction kinds that consumed at least one pair.
    pub fn kinds(&self) -> Vec<InteractionKind> {
        self.interactions.kinds()
    }
}

/// The four-stage interaction classifier.
///
/// Stage order is a priority policy: a same-flavor quark/antiquark pair in
/// the final state satisfies both the strong and the electromagnetic
/// predicates and must be reported as strong. The pipeline therefore only
/// ever holds the four canonical stages, in canonical order.
pub struct Classifier {
    stages: Vec<Box<dyn InteractionStage>>,
    validator: ConservationValidator,
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            stages: canonical_stages(),
            validator: ConservationValidator::default(),
            config,
        }
    }

    /// Replace the conservation validator.
    pub fn with_validator(mut self, validator: ConservationValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Replace the stage implementations.
    ///
    /// Fails closed: the list must hold exactly one stage per interaction
    /// kind, numbered 1 to 4 in canonical order.
    pub fn with_stages(mut self, stages: Vec<Box<dyn InteractionStage>>) -> ClassifierResult<Self> {
        if stages.len() != InteractionKind::ALL.len() {
            return Err(ClassifierError::InvalidPipeline(format!(
                "expected {} stages, got {}",
                InteractionKind::ALL.len(),
                stages.len()
            )));
        }
        for (position, (stage, expected)) in stages.iter().zip(InteractionKind::ALL).enumerate() {
            let number = position + 1;
            if stage.kind() != expected || usize::from(stage.stage_number()) != number {
                return Err(ClassifierError::InvalidPipeline(format!(
                    "stage {} must be the {} stage, found '{}' ({}, number {})",
                    number,
                    expected,
                    stage.stage_name(),
                    stage.kind(),
                    stage.stage_number()
                )));
            }
        }
        self.stages = stages;
        Ok(self)
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn validator(&self) -> &ConservationValidator {
        &self.validator
    }

    /// Names of the stages, in execution order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.stage_name()).collect()
    }

    /// Validate, expand composites, drop spectators and run every stage.
    ///
    /// Conservation is checked on the reaction as given, before composites
    /// are expanded, since hadron masses are not the sum of quark masses.
    pub fn classify(
        &self,
        reaction: &Reaction,
        table: &dyn AttributeTable,
    ) -> ClassifierResult<ClassificationReport> {
        let violations = self.validator.validate(reaction, table)?;
        let elemental = reaction.expand_composites(table)?;
        let separation = separate(&elemental);
        debug!(
            spectators = separation.spectators.len(),
            interacting = separation.interacting.len(),
            "Spectators separated"
        );

        let (interactions, remainder) = if self.config.skip_forbidden && !violations.is_empty() {
            debug!(violations = violations.len(), "Forbidden reaction, skipping interaction stages");
            (InteractionRecord::new(), separation.interacting)
        } else {
            self.run_stages(&separation.interacting, table)?
        };

        info!(
            reaction = %reaction,
            allowed = violations.is_empty(),
            pairs = interactions.pair_count(),
            unclassified = remainder.len(),
            "Reaction classified"
        );

        Ok(ClassificationReport {
            reaction: reaction.clone(),
            elemental,
            violations,
            spectators: separation.spectators,
            interactions,
            remainder,
        })
    }

    /// Run the stages over an already-separated interacting set.
    ///
    /// Each stage sees only what the previous one left; the final leftover is
    /// returned alongside the record.
    pub fn run_stages(
        &self,
        interacting: &Reaction,
        table: &dyn AttributeTable,
    ) -> ClassifierResult<(InteractionRecord, Reaction)> {
        let mut record = InteractionRecord::new();
        let mut remaining = interacting.clone();

        for stage in &self.stages {
            let output = stage.apply(&remaining, table)?;
            debug!(
                stage = stage.stage_name(),
                number = stage.stage_number(),
                pairs = output.pairs.len(),
                initial_left = output.remaining.initial_state.len(),
                final_left = output.remaining.final_state.len(),
                "Stage applied"
            );
            record.absorb(output.pairs);
            remaining = output.remaining;
        }

        Ok((record, remaining))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}
