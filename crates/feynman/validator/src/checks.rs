//! Individual conservation checks.
//!
//! Every check sees the already-resolved attributes of both sides and returns
//! zero or more violations; none of them fails fast.

use feynman_types::{LeptonFlavor, ParticleAttributes, Rational64};
use num_traits::Zero;

use crate::law::{ConservationLaw, Quantity, Violation};

/// One conservation law evaluated over a resolved reaction.
pub trait ConservationCheck: Send + Sync {
    /// Human-readable name, used in logs.
    fn name(&self) -> &str;

    fn check(
        &self,
        initial: &[&ParticleAttributes],
        final_state: &[&ParticleAttributes],
    ) -> Vec<Violation>;
}

fn sum_exact<F>(particles: &[&ParticleAttributes], quantity: F) -> Rational64
where
    F: Fn(&ParticleAttributes) -> Rational64,
{
    particles
        .iter()
        .fold(Rational64::zero(), |acc, attrs| acc + quantity(attrs))
}

fn compare_exact<F>(
    law: ConservationLaw,
    initial: &[&ParticleAttributes],
    final_state: &[&ParticleAttributes],
    quantity: F,
) -> Option<Violation>
where
    F: Fn(&ParticleAttributes) -> Rational64,
{
    let lhs = sum_exact(initial, &quantity);
    let rhs = sum_exact(final_state, &quantity);
    (lhs != rhs).then(|| Violation::new(law, Quantity::Exact(lhs), Quantity::Exact(rhs)))
}

/// Σ Q must match.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChargeConservation;

impl ConservationCheck for ChargeConservation {
    fn name(&self) -> &str {
        "charge"
    }

    fn check(
        &self,
        initial: &[&ParticleAttributes],
        final_state: &[&ParticleAttributes],
    ) -> Vec<Violation> {
        compare_exact(ConservationLaw::Charge, initial, final_state, |a| a.charge)
            .into_iter()
            .collect()
    }
}

/// Σ B must match.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaryonConservation;

impl ConservationCheck for BaryonConservation {
    fn name(&self) -> &str {
        "baryon number"
    }

    fn check(
        &self,
        initial: &[&ParticleAttributes],
        final_state: &[&ParticleAttributes],
    ) -> Vec<Violation> {
        compare_exact(ConservationLaw::BaryonNumber, initial, final_state, |a| {
            a.baryon_number
        })
        .into_iter()
        .collect()
    }
}

/// Each lepton family number must match on its own; one violation per family.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeptonConservation;

impl ConservationCheck for LeptonConservation {
    fn name(&self) -> &str {
        "lepton number"
    }

    fn check(
        &self,
        initial: &[&ParticleAttributes],
        final_state: &[&ParticleAttributes],
    ) -> Vec<Violation> {
        LeptonFlavor::ALL
            .iter()
            .filter_map(|&flavor| {
                compare_exact(
                    ConservationLaw::LeptonNumber(flavor),
                    initial,
                    final_state,
                    |a| Rational64::from_integer(i64::from(a.lepton_number.get(flavor))),
                )
            })
            .collect()
    }
}

/// A decay cannot produce more rest mass than the decaying particle has.
///
/// Skipped unless there is exactly one initial particle: in a scattering,
/// kinetic energy can make up the difference.
#[derive(Clone, Copy, Debug, Default)]
pub struct MassConservation;

impl ConservationCheck for MassConservation {
    fn name(&self) -> &str {
        "mass"
    }

    fn check(
        &self,
        initial: &[&ParticleAttributes],
        final_state: &[&ParticleAttributes],
    ) -> Vec<Violation> {
        let [parent] = initial else {
            return Vec::new();
        };
        let products: f64 = final_state.iter().map(|a| a.mass).sum();
        if products > parent.mass {
            vec![Violation::new(
                ConservationLaw::Mass,
                Quantity::Mass(parent.mass),
                Quantity::Mass(products),
            )]
        } else {
            Vec::new()
        }
    }
}
