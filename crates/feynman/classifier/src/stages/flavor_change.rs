use feynman_types::{AttributeTable, ParticleAttributes, ParticlePair, Reaction, Side};
use num_traits::Zero;
use tracing::debug;

use crate::error::ClassifierResult;
use crate::matching::{self, Leg, Pool};
use crate::record::{FlavorChangePairs, InteractionKind, StagePairs};
use crate::traits::{InteractionStage, StageOutput};

/// Stage 1: Flavor Change
///
/// Charged-current transitions mediated by a W boson. Runs two passes:
///
/// 1. Initial → final. An initial quark pairs with the first final quark of
///    the same baryon number but different charge and symbol (`d → u`). An
///    initial lepton pairs with the first final lepton of the same lepton
///    numbers and flavor tag but a different symbol (`μ⁻ → ν_μ`).
/// 2. Within a side. A particle and an antiparticle of the same side whose
///    baryon numbers (quarks) or lepton numbers and flavor tag (leptons)
///    cancel, but whose charges do not, were created or annihilated together
///    by a W (`W⁻ → e⁻ ν̄_e`). Initial-side pairs read `(particle,
///    antiparticle)`, final-side pairs `(antiparticle, particle)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlavorChangeStage;

fn quark_transition(a: &ParticleAttributes, b: &ParticleAttributes) -> bool {
    a.baryon_number == b.baryon_number && a.charge != b.charge && a.symbol != b.symbol
}

fn lepton_transition(a: &ParticleAttributes, b: &ParticleAttributes) -> bool {
    a.lepton_number == b.lepton_number
        && a.flavor_tag().is_some()
        && a.flavor_tag() == b.flavor_tag()
        && a.symbol != b.symbol
}

fn charged_current_quarks(a: &ParticleAttributes, b: &ParticleAttributes) -> bool {
    a.is_antiparticle() != b.is_antiparticle()
        && (a.baryon_number + b.baryon_number).is_zero()
        && !matching::charges_cancel(a, b)
        && a.symbol != b.symbol
}

fn charged_current_leptons(a: &ParticleAttributes, b: &ParticleAttributes) -> bool {
    matching::conjugate_numbers(a, b)
        && a.flavor_tag().is_some()
        && a.flavor_tag() == b.flavor_tag()
        && !matching::charges_cancel(a, b)
        && a.symbol != b.symbol
}

fn oriented(side: Side, first: Leg<'_>, second: Leg<'_>) -> ParticlePair {
    let (particle, antiparticle) = if first.attrs.is_antiparticle() {
        (second, first)
    } else {
        (first, second)
    };
    match side {
        Side::Initial => ParticlePair(particle.name.clone(), antiparticle.name.clone()),
        Side::Final => ParticlePair(antiparticle.name.clone(), particle.name.clone()),
    }
}

fn pair_same_side(pool: &mut Pool<'_>, pairs: &mut FlavorChangePairs) {
    let side = pool.side();
    let quarks = matching::pair_within(pool, ParticleAttributes::is_quark, charged_current_quarks);
    pairs
        .quark_pairs
        .extend(quarks.into_iter().map(|(a, b)| oriented(side, a, b)));

    let leptons =
        matching::pair_within(pool, ParticleAttributes::is_lepton, charged_current_leptons);
    pairs
        .lepton_pairs
        .extend(leptons.into_iter().map(|(a, b)| oriented(side, a, b)));
}

impl InteractionStage for FlavorChangeStage {
    fn stage_name(&self) -> &str {
        "Flavor Change"
    }

    fn stage_number(&self) -> u8 {
        1
    }

    fn kind(&self) -> InteractionKind {
        InteractionKind::FlavorChange
    }

    fn apply(&self, interacting: &Reaction, table: &dyn AttributeTable) -> ClassifierResult<StageOutput> {
        let mut initial = Pool::resolve(interacting, Side::Initial, table)?;
        let mut final_state = Pool::resolve(interacting, Side::Final, table)?;

        let mut pairs = FlavorChangePairs {
            quark_pairs: matching::pair_across(
                &mut initial,
                &mut final_state,
                ParticleAttributes::is_quark,
                quark_transition,
            ),
            lepton_pairs: matching::pair_across(
                &mut initial,
                &mut final_state,
                ParticleAttributes::is_lepton,
                lepton_transition,
            ),
        };
        debug!(
            quark_pairs = pairs.quark_pairs.len(),
            lepton_pairs = pairs.lepton_pairs.len(),
            "Cross-side flavor transitions matched"
        );

        pair_same_side(&mut initial, &mut pairs);
        pair_same_side(&mut final_state, &mut pairs);

        Ok(StageOutput {
            pairs: StagePairs::FlavorChange(pairs),
            remaining: matching::remaining(&initial, &final_state),
        })
    }
}
