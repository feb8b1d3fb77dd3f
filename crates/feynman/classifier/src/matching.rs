//! Greedy first-match pairing shared by every stage.
//!
//! Candidates are always scanned in input order and a pair, once formed, is
//! never revisited. Which pairs form therefore depends on particle order.

use feynman_types::{
    AttributeTable, ParticleAttributes, ParticleName, ParticlePair, Reaction, Side,
};
use num_traits::Zero;

use crate::error::{ClassifierError, ClassifierResult};

/// One particle instance with its resolved attributes.
#[derive(Clone, Copy, Debug)]
pub struct Leg<'a> {
    /// Position within its side
    pub index: usize,
    pub name: &'a ParticleName,
    pub attrs: &'a ParticleAttributes,
}

/// The particles of one side plus a consumed flag per instance.
#[derive(Debug)]
pub struct Pool<'a> {
    side: Side,
    legs: Vec<Leg<'a>>,
    used: Vec<bool>,
}

impl<'a> Pool<'a> {
    /// Resolve every name on `side` of `reaction`.
    pub fn resolve(
        reaction: &'a Reaction,
        side: Side,
        table: &'a dyn AttributeTable,
    ) -> ClassifierResult<Self> {
        let legs = reaction
            .side(side)
            .iter()
            .enumerate()
            .map(|(index, name)| {
                table
                    .lookup(name)
                    .map(|attrs| Leg { index, name, attrs })
                    .ok_or_else(|| ClassifierError::UnknownParticle(name.clone()))
            })
            .collect::<ClassifierResult<Vec<_>>>()?;
        let used = vec![false; legs.len()];
        Ok(Self { side, legs, used })
    }

    pub fn side(&self) -> Side {
        self.side
    }

    fn available(&self, i: usize) -> Option<Leg<'a>> {
        (!self.used[i]).then_some(self.legs[i])
    }

    /// Unconsumed particle names, in input order.
    pub fn remaining(&self) -> Vec<ParticleName> {
        self.legs
            .iter()
            .zip(&self.used)
            .filter(|(_, used)| !**used)
            .map(|(leg, _)| leg.name.clone())
            .collect()
    }
}

/// Pair initial particles with final particles.
///
/// For each eligible, unconsumed leg of `from` (in order) the first eligible,
/// unconsumed leg of `to` satisfying `compatible(from, to)` is taken. Pairs
/// are reported as `(from, to)`.
pub fn pair_across<S, C>(
    from: &mut Pool<'_>,
    to: &mut Pool<'_>,
    eligible: S,
    compatible: C,
) -> Vec<ParticlePair>
where
    S: Fn(&ParticleAttributes) -> bool,
    C: Fn(&ParticleAttributes, &ParticleAttributes) -> bool,
{
    let mut pairs = Vec::new();
    for i in 0..from.legs.len() {
        let Some(anchor) = from.available(i).filter(|leg| eligible(leg.attrs)) else {
            continue;
        };
        let partner = (0..to.legs.len())
            .filter_map(|j| to.available(j))
            .find(|leg| eligible(leg.attrs) && compatible(anchor.attrs, leg.attrs));
        if let Some(partner) = partner {
            from.used[anchor.index] = true;
            to.used[partner.index] = true;
            pairs.push(ParticlePair(anchor.name.clone(), partner.name.clone()));
        }
    }
    pairs
}

/// Pair particles on the same side with each other.
///
/// `compatible` must be symmetric: an anchor only looks at later legs, since
/// any earlier unconsumed leg already had its turn as anchor. The legs are
/// returned in input order so each stage can orient the pair itself.
pub fn pair_within<'a, S, C>(
    pool: &mut Pool<'a>,
    eligible: S,
    compatible: C,
) -> Vec<(Leg<'a>, Leg<'a>)>
where
    S: Fn(&ParticleAttributes) -> bool,
    C: Fn(&ParticleAttributes, &ParticleAttributes) -> bool,
{
    let mut pairs = Vec::new();
    for i in 0..pool.legs.len() {
        let Some(anchor) = pool.available(i).filter(|leg| eligible(leg.attrs)) else {
            continue;
        };
        let partner = (i + 1..pool.legs.len())
            .filter_map(|j| pool.available(j))
            .find(|leg| eligible(leg.attrs) && compatible(anchor.attrs, leg.attrs));
        if let Some(partner) = partner {
            pool.used[anchor.index] = true;
            pool.used[partner.index] = true;
            pairs.push((anchor, partner));
        }
    }
    pairs
}

/// Rebuild the reaction from whatever both pools have left.
pub fn remaining(initial: &Pool<'_>, final_state: &Pool<'_>) -> Reaction {
    Reaction {
        initial_state: initial.remaining(),
        final_state: final_state.remaining(),
    }
}

/// Particle and antiparticle whose baryon number and every lepton number cancel.
pub fn conjugate_numbers(a: &ParticleAttributes, b: &ParticleAttributes) -> bool {
    a.is_antiparticle() != b.is_antiparticle()
        && (a.baryon_number + b.baryon_number).is_zero()
        && (a.lepton_number + b.lepton_number).is_zero()
}

pub fn charges_cancel(a: &ParticleAttributes, b: &ParticleAttributes) -> bool {
    (a.charge + b.charge).is_zero()
}

/// Same flavor tag for leptons, same generation magnitude for quarks.
pub fn same_family(a: &ParticleAttributes, b: &ParticleAttributes) -> bool {
    if a.is_lepton() && b.is_lepton() {
        a.flavor_tag().is_some() && a.flavor_tag() == b.flavor_tag()
    } else if a.is_quark() && b.is_quark() {
        a.family_magnitude().is_some() && a.family_magnitude() == b.family_magnitude()
    } else {
        false
    }
}
