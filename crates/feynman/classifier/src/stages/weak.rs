use feynman_types::{AttributeTable, ParticleAttributes, ParticlePair, Reaction, Side};
use tracing::debug;

use crate::error::ClassifierResult;
use crate::matching::{self, Pool};
use crate::record::{InteractionKind, StagePairs, WeakPairs};
use crate::traits::{InteractionStage, StageOutput};

/// Stage 4: Weak (neutral current)
///
/// Whatever survives the earlier stages is paired through a Z when two
/// quarks or two leptons on the same side are exact conjugates: baryon and
/// lepton numbers cancel, charges cancel, and they share a flavor tag
/// (leptons) or generation (quarks). Bosons are never paired. The initial
/// side is searched before the final side and both feed one list.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeakStage;

fn z_pair(a: &ParticleAttributes, b: &ParticleAttributes) -> bool {
    matching::conjugate_numbers(a, b)
        && matching::charges_cancel(a, b)
        && matching::same_family(a, b)
}

fn pair_side(pool: &mut Pool<'_>) -> Vec<ParticlePair> {
    matching::pair_within(pool, ParticleAttributes::is_elementary_fermion, z_pair)
        .into_iter()
        .map(|(a, b)| ParticlePair(a.name.clone(), b.name.clone()))
        .collect()
}

impl InteractionStage for WeakStage {
    fn stage_name(&self) -> &str {
        "Weak"
    }

    fn stage_number(&self) -> u8 {
        4
    }

    fn kind(&self) -> InteractionKind {
        InteractionKind::Weak
    }

    fn apply(&self, interacting: &Reaction, table: &dyn AttributeTable) -> ClassifierResult<StageOutput> {
        let mut initial = Pool::resolve(interacting, Side::Initial, table)?;
        let mut final_state = Pool::resolve(interacting, Side::Final, table)?;

        let mut pairs = pair_side(&mut initial);
        pairs.extend(pair_side(&mut final_state));
        debug!(pairs = pairs.len(), "Neutral-current pairs matched");

        Ok(StageOutput {
            pairs: StagePairs::Weak(WeakPairs { pairs }),
            remaining: matching::remaining(&initial, &final_state),
        })
    }
}
