//! Property tests for the conservation validator over the bundled table.

use feynman_types::{AttributeTable, ParticleName, ParticleTable, Reaction};
use feynman_validator::{ConservationLaw, ConservationValidator};
use proptest::prelude::*;

fn standard_names() -> Vec<String> {
    ParticleTable::standard()
        .unwrap()
        .iter()
        .map(|(name, _)| name.to_string())
        .collect()
}

fn particles(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(standard_names()), len)
}

proptest! {
    #[test]
    fn permuted_reaction_has_no_violations(
        (initial, final_state) in particles(1..7).prop_flat_map(|initial| {
            let shuffled = Just(initial.clone()).prop_shuffle();
            (Just(initial), shuffled)
        })
    ) {
        let table = ParticleTable::standard().unwrap();
        let reaction = Reaction::new(initial, final_state);
        let violations = ConservationValidator::default().validate(&reaction, &table).unwrap();
        prop_assert!(violations.is_empty(), "{}: {:?}", reaction, violations);
    }

    #[test]
    fn scattering_never_reports_mass(
        initial in particles(2..5),
        final_state in particles(1..6),
    ) {
        let table = ParticleTable::standard().unwrap();
        let reaction = Reaction::new(initial, final_state);
        let violations = ConservationValidator::default().validate(&reaction, &table).unwrap();
        prop_assert!(violations.iter().all(|v| v.law != ConservationLaw::Mass));
    }

    #[test]
    fn heavier_products_always_violate_mass_once(
        parent in prop::sample::select(standard_names()),
        products in particles(1..4),
    ) {
        let table = ParticleTable::standard().unwrap();
        let reaction = Reaction::new([parent], products);
        let mass = |name: &ParticleName| table.get(name).unwrap().mass;
        let parent_mass = mass(&reaction.initial_state[0]);
        let product_mass: f64 = reaction.final_state.iter().map(mass).sum();

        let violations = ConservationValidator::default().validate(&reaction, &table).unwrap();
        let mass_violations = violations.iter().filter(|v| v.law == ConservationLaw::Mass).count();
        prop_assert_eq!(mass_violations, usize::from(product_mass > parent_mass));
    }
}
