//! `feynman classify`: full interaction breakdown

use feynman_classifier::{ClassificationReport, Classifier, InteractionKind};
use feynman_types::{ParticlePair, ParticleTable};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliResult;
use crate::output::{
    particle_list, print_document, print_field, print_note, print_reaction, print_success,
    print_verdict, print_warning, OutputFormat,
};

#[derive(Debug, Serialize, Tabled)]
struct PairRow {
    interaction: String,
    mediator: &'static str,
    side: &'static str,
    pair: String,
}

impl PairRow {
    fn new(kind: InteractionKind, side: &'static str, pair: &ParticlePair) -> Self {
        Self {
            interaction: kind.to_string(),
            mediator: kind.mediator(),
            side,
            pair: pair.to_string(),
        }
    }
}

fn pair_rows(report: &ClassificationReport) -> Vec<PairRow> {
    let record = &report.interactions;
    let groups: [(InteractionKind, &'static str, &[ParticlePair]); 6] = [
        (InteractionKind::FlavorChange, "quarks", &record.flavor_change.quark_pairs),
        (InteractionKind::FlavorChange, "leptons", &record.flavor_change.lepton_pairs),
        (InteractionKind::Strong, "final", &record.strong.quark_pairs),
        (InteractionKind::Electromagnetic, "initial", &record.em.initial_pairs),
        (InteractionKind::Electromagnetic, "final", &record.em.final_pairs),
        (InteractionKind::Weak, "either", &record.weak.pairs),
    ];
    groups
        .iter()
        .flat_map(|&(kind, side, pairs)| pairs.iter().map(move |pair| PairRow::new(kind, side, pair)))
        .collect()
}

fn print_report(report: &ClassificationReport) {
    print_reaction(&report.reaction);
    if report.elemental != report.reaction {
        print_field("Elemental", &report.elemental);
    }
    print_verdict(&report.violations);
    print_field("Spectators", particle_list(&report.spectators));

    let rows = pair_rows(report);
    if rows.is_empty() {
        print_note("No interaction vertices identified");
    } else {
        println!("{}", Table::new(rows));
    }

    if report.is_fully_classified() {
        print_success("All interacting particles classified");
    } else {
        print_warning(&format!("Unclassified: {}", report.remainder));
    }
}

pub fn execute(
    words: &[String],
    table: &ParticleTable,
    classifier: &Classifier,
    format: OutputFormat,
) -> CliResult<()> {
    let reaction = super::read_reaction(words, table)?;
    let report = classifier.classify(&reaction, table)?;

    match format {
        OutputFormat::Table => print_report(&report),
        _ => print_document(&report, format)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use feynman_types::Reaction;

    #[test]
    fn rows_follow_stage_order() {
        let table = ParticleTable::standard().unwrap();
        let reaction = Reaction::new(["electron", "positron"], ["up", "antiup"]);
        let report = Classifier::default().classify(&reaction, &table).unwrap();

        let rows = pair_rows(&report);
        let kinds: Vec<_> = rows.iter().map(|r| r.interaction.as_str()).collect();
        assert_eq!(kinds, vec!["strong", "electromagnetic"]);
        assert_eq!(rows[0].mediator, "g");
        assert_eq!(rows[1].pair, "(electron, positron)");
    }
}
