use feynman_types::{AttributeTable, ParticleAttributes, ParticlePair, Reaction, Side};
use tracing::debug;

use crate::error::ClassifierResult;
use crate::matching::{self, Pool};
use crate::record::{ElectromagneticPairs, InteractionKind, StagePairs};
use crate::traits::{InteractionStage, StageOutput};

/// Stage 3: Electromagnetic
///
/// Photon vertices, searched on each side independently. Only charged
/// quarks and leptons take part: two leptons with the same flavor tag, or
/// two quarks of the same generation, pair when their charges cancel.
#[derive(Clone, Copy, Debug, Default)]
pub struct ElectromagneticStage;

fn charged_fermion(attrs: &ParticleAttributes) -> bool {
    attrs.is_elementary_fermion() && attrs.is_charged()
}

fn photon_pair(a: &ParticleAttributes, b: &ParticleAttributes) -> bool {
    matching::same_family(a, b) && matching::charges_cancel(a, b)
}

fn pair_side(pool: &mut Pool<'_>) -> Vec<ParticlePair> {
    matching::pair_within(pool, charged_fermion, photon_pair)
        .into_iter()
        .map(|(a, b)| ParticlePair(a.name.clone(), b.name.clone()))
        .collect()
}

impl InteractionStage for ElectromagneticStage {
    fn stage_name(&self) -> &str {
        "Electromagnetic"
    }

    fn stage_number(&self) -> u8 {
        3
    }

    fn kind(&self) -> InteractionKind {
        InteractionKind::Electromagnetic
    }

    fn apply(&self, interacting: &Reaction, table: &dyn AttributeTable) -> ClassifierResult<StageOutput> {
        let mut initial = Pool::resolve(interacting, Side::Initial, table)?;
        let mut final_state = Pool::resolve(interacting, Side::Final, table)?;

        let pairs = ElectromagneticPairs {
            initial_pairs: pair_side(&mut initial),
            final_pairs: pair_side(&mut final_state),
        };
        debug!(
            initial_pairs = pairs.initial_pairs.len(),
            final_pairs = pairs.final_pairs.len(),
            "Photon vertices matched"
        );

        Ok(StageOutput {
            pairs: StagePairs::Electromagnetic(pairs),
            remaining: matching::remaining(&initial, &final_state),
        })
    }
}
