//! Spectator separation.

use feynman_types::{ParticleName, Reaction};
use serde::{Deserialize, Serialize};

/// Result of removing spectators from a reaction.
///
/// The spectator multiset is the same on both sides, so it is stored once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separation {
    /// Particles present unchanged on both sides, in initial-state order
    pub spectators: Vec<ParticleName>,
    /// What is left to classify
    pub interacting: Reaction,
}

/// Remove particles common to both sides, one instance for one instance.
///
/// Each initial particle takes the first still-unmatched final particle with
/// the same name. Two electrons in against one electron out leave one
/// spectator electron and one interacting electron. Surviving particles keep
/// their input order.
pub fn separate(reaction: &Reaction) -> Separation {
    let mut unmatched: Vec<Option<&ParticleName>> = reaction.final_state.iter().map(Some).collect();
    let mut spectators = Vec::new();
    let mut initial = Vec::new();

    for name in &reaction.initial_state {
        match unmatched.iter().position(|slot| *slot == Some(name)) {
            Some(j) => {
                unmatched[j] = None;
                spectators.push(name.clone());
            }
            None => initial.push(name.clone()),
        }
    }

    Separation {
        spectators,
        interacting: Reaction {
            initial_state: initial,
            final_state: unmatched.into_iter().flatten().cloned().collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_common_particles() {
        let reaction = Reaction::new(
            ["electron", "muon", "muon neutrino"],
            ["electron", "electron neutrino", "muon neutrino"],
        );
        let separation = separate(&reaction);

        assert_eq!(
            separation.spectators,
            vec![ParticleName::from("electron"), ParticleName::from("muon neutrino")]
        );
        assert_eq!(
            separation.interacting,
            Reaction::new(["muon"], ["electron neutrino"])
        );
    }

    #[test]
    fn duplicates_match_one_for_one() {
        let reaction = Reaction::new(["electron", "electron"], ["electron", "photon"]);
        let separation = separate(&reaction);

        assert_eq!(separation.spectators, vec![ParticleName::from("electron")]);
        assert_eq!(
            separation.interacting,
            Reaction::new(["electron"], ["photon"])
        );
    }

    #[test]
    fn no_common_particles() {
        let reaction = Reaction::new(["electron", "positron"], ["muon", "antimuon"]);
        let separation = separate(&reaction);
        assert!(separation.spectators.is_empty());
        assert_eq!(separation.interacting, reaction);
    }

    #[test]
    fn final_order_is_stable() {
        let reaction = Reaction::new(["up"], ["down", "up", "antiup", "up"]);
        let separation = separate(&reaction);
        assert_eq!(
            separation.interacting.final_state,
            vec![
                ParticleName::from("down"),
                ParticleName::from("antiup"),
                ParticleName::from("up"),
            ]
        );
    }
}
