//! Structural properties of separation and classification over random reactions.

use feynman_classifier::{separate, Classifier};
use feynman_types::{ParticleName, ParticleTable, Reaction};
use proptest::prelude::*;

fn elementary_names() -> Vec<String> {
    ParticleTable::standard()
        .unwrap()
        .iter()
        .filter(|(_, attrs)| !attrs.is_composite())
        .map(|(name, _)| name.to_string())
        .collect()
}

fn any_names() -> Vec<String> {
    ParticleTable::standard()
        .unwrap()
        .iter()
        .map(|(name, _)| name.to_string())
        .collect()
}

fn reaction_from(pool: Vec<String>, max: usize) -> impl Strategy<Value = Reaction> {
    let side = prop::collection::vec(prop::sample::select(pool), 0..max);
    (side.clone(), side).prop_map(|(initial, final_state)| Reaction::new(initial, final_state))
}

fn sorted<'a>(names: impl IntoIterator<Item = &'a ParticleName>) -> Vec<&'a ParticleName> {
    let mut names: Vec<_> = names.into_iter().collect();
    names.sort();
    names
}

proptest! {
    #[test]
    fn spectators_plus_interacting_rebuild_each_side(reaction in reaction_from(elementary_names(), 8)) {
        let separation = separate(&reaction);

        prop_assert_eq!(
            sorted(separation.spectators.iter().chain(&separation.interacting.initial_state)),
            sorted(&reaction.initial_state)
        );
        prop_assert_eq!(
            sorted(separation.spectators.iter().chain(&separation.interacting.final_state)),
            sorted(&reaction.final_state)
        );
    }

    #[test]
    fn interacting_sides_share_no_name(reaction in reaction_from(elementary_names(), 8)) {
        let separation = separate(&reaction);
        for name in &separation.interacting.initial_state {
            prop_assert!(!separation.interacting.final_state.contains(name));
        }
    }

    #[test]
    fn every_interacting_particle_is_consumed_exactly_once(reaction in reaction_from(any_names(), 6)) {
        let table = ParticleTable::standard().unwrap();
        let report = Classifier::default().classify(&reaction, &table).unwrap();
        let interacting = separate(&report.elemental).interacting;

        let consumed = report.interactions.particles();
        let accounted = sorted(
            consumed
                .into_iter()
                .chain(&report.remainder.initial_state)
                .chain(&report.remainder.final_state),
        );
        let expected = sorted(
            interacting
                .initial_state
                .iter()
                .chain(&interacting.final_state),
        );
        prop_assert_eq!(accounted, expected);
    }

    #[test]
    fn remainder_keeps_input_order(reaction in reaction_from(elementary_names(), 8)) {
        let table = ParticleTable::standard().unwrap();
        let report = Classifier::default().classify(&reaction, &table).unwrap();
        let interacting = separate(&report.elemental).interacting;

        let mut source = interacting.initial_state.iter();
        for name in &report.remainder.initial_state {
            prop_assert!(source.any(|candidate| candidate == name));
        }
        let mut source = interacting.final_state.iter();
        for name in &report.remainder.final_state {
            prop_assert!(source.any(|candidate| candidate == name));
        }
    }

    #[test]
    fn classification_is_deterministic(reaction in reaction_from(any_names(), 6)) {
        let table = ParticleTable::standard().unwrap();
        let classifier = Classifier::default();
        let first = classifier.classify(&reaction, &table).unwrap();
        let second = classifier.classify(&reaction, &table).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn identical_sides_are_all_spectators(
        side in prop::collection::vec(prop::sample::select(any_names()), 1..6)
    ) {
        let table = ParticleTable::standard().unwrap();
        let reaction = Reaction::new(side.clone(), side);
        let report = Classifier::default().classify(&reaction, &table).unwrap();

        prop_assert!(report.is_allowed());
        prop_assert!(report.interactions.is_empty());
        prop_assert!(report.remainder.is_empty());
        prop_assert_eq!(report.spectators, report.elemental.initial_state);
    }
}
