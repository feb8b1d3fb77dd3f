use feynman_types::{AttributeTable, Reaction};

use crate::error::ClassifierResult;
use crate::record::{InteractionKind, StagePairs};

/// What a stage hands to the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageOutput {
    /// Pairs consumed by this stage
    pub pairs: StagePairs,
    /// Particles this stage did not consume, in input order
    pub remaining: Reaction,
}

/// One matcher of the classification pipeline.
///
/// A stage consumes pairs from the interacting particles it is given and
/// passes everything else on untouched. It never sees particles an earlier
/// stage consumed, and it runs exactly once per classification.
pub trait InteractionStage: Send + Sync {
    /// Human-readable stage name.
    fn stage_name(&self) -> &str;

    /// Position in the pipeline (1-based).
    fn stage_number(&self) -> u8;

    /// The interaction category whose pairs this stage produces.
    fn kind(&self) -> InteractionKind;

    fn apply(&self, interacting: &Reaction, table: &dyn AttributeTable) -> ClassifierResult<StageOutput>;
}
