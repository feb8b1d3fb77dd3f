use feynman_types::{AttributeTable, ParticleAttributes, ParticlePair, Reaction, Side};
use num_traits::{Signed, Zero};
use tracing::debug;

use crate::error::ClassifierResult;
use crate::matching::{self, Pool};
use crate::record::{InteractionKind, StagePairs, StrongPairs};
use crate::traits::{InteractionStage, StageOutput};

/// Stage 2: Strong
///
/// Quark/antiquark pair production by a gluon. Only the final state is
/// searched; the initial state passes through untouched. Two final quarks
/// pair when their baryon numbers are exact negatives and they share charge
/// magnitude and generation, i.e. `q q̄` of one flavor.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrongStage;

fn gluon_pair(a: &ParticleAttributes, b: &ParticleAttributes) -> bool {
    !a.baryon_number.is_zero()
        && (a.baryon_number + b.baryon_number).is_zero()
        && a.charge.abs() == b.charge.abs()
        && a.family_magnitude().is_some()
        && a.family_magnitude() == b.family_magnitude()
}

impl InteractionStage for StrongStage {
    fn stage_name(&self) -> &str {
        "Strong"
    }

    fn stage_number(&self) -> u8 {
        2
    }

    fn kind(&self) -> InteractionKind {
        InteractionKind::Strong
    }

    fn apply(&self, interacting: &Reaction, table: &dyn AttributeTable) -> ClassifierResult<StageOutput> {
        let initial = Pool::resolve(interacting, Side::Initial, table)?;
        let mut final_state = Pool::resolve(interacting, Side::Final, table)?;

        let quark_pairs: Vec<ParticlePair> =
            matching::pair_within(&mut final_state, ParticleAttributes::is_quark, gluon_pair)
                .into_iter()
                .map(|(a, b)| ParticlePair(a.name.clone(), b.name.clone()))
                .collect();
        debug!(quark_pairs = quark_pairs.len(), "Final-state quark pairs matched");

        Ok(StageOutput {
            pairs: StagePairs::Strong(StrongPairs { quark_pairs }),
            remaining: matching::remaining(&initial, &final_state),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feynman_types::ParticleTable;

    fn run(initial: &[&str], final_state: &[&str]) -> (Vec<ParticlePair>, Reaction) {
        let table = ParticleTable::standard().unwrap();
        let reaction = Reaction::new(initial.iter().copied(), final_state.iter().copied());
        let output = StrongStage.apply(&reaction, &table).unwrap();
        match output.pairs {
            StagePairs::Strong(pairs) => (pairs.quark_pairs, output.remaining),
            other => panic!("unexpected stage pairs {:?}", other),
        }
    }

    #[test]
    fn pairs_same_flavor_quark_antiquark() {
        let (pairs, remaining) = run(&["up", "antiup"], &["down", "antidown", "charm"]);
        assert_eq!(pairs, vec![ParticlePair::new("down", "antidown")]);
        assert_eq!(remaining, Reaction::new(["up", "antiup"], ["charm"]));
    }

    #[test]
    fn generation_must_match() {
        let (pairs, remaining) = run(&[], &["up", "anticharm"]);
        assert!(pairs.is_empty());
        assert_eq!(remaining.final_state.len(), 2);
    }

    #[test]
    fn same_sign_quarks_do_not_pair() {
        let (pairs, _) = run(&[], &["up", "up", "antiup"]);
        assert_eq!(pairs, vec![ParticlePair::new("up", "antiup")]);

        let (pairs, _) = run(&[], &["down", "down"]);
        assert!(pairs.is_empty());
    }

    #[test]
    fn leptons_are_ignored() {
        let (pairs, remaining) = run(&[], &["electron", "positron"]);
        assert!(pairs.is_empty());
        assert_eq!(remaining.final_state.len(), 2);
    }
}
