//! `feynman particles`: list the attribute table

use feynman_types::{ParticleAttributes, ParticleName, ParticleTable};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliResult;
use crate::output::{print_rows, OutputFormat};

#[derive(Debug, Serialize, Tabled)]
struct ParticleRow {
    name: String,
    symbol: String,
    category: String,
    charge: String,
    baryon: String,
    #[tabled(rename = "mass (MeV)")]
    mass: f64,
    family: String,
}

impl ParticleRow {
    fn new(name: &ParticleName, attrs: &ParticleAttributes) -> Self {
        Self {
            name: name.to_string(),
            symbol: attrs.symbol.clone(),
            category: attrs.category.to_string(),
            charge: attrs.charge.to_string(),
            baryon: attrs.baryon_number.to_string(),
            mass: attrs.mass,
            family: attrs
                .family
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

/// List particles, optionally only those whose category contains `category`.
pub fn execute(table: &ParticleTable, category: Option<&str>, format: OutputFormat) -> CliResult<()> {
    let rows: Vec<ParticleRow> = table
        .iter()
        .filter(|(_, attrs)| {
            category.map_or(true, |wanted| attrs.category.to_string().contains(wanted))
        })
        .map(|(name, attrs)| ParticleRow::new(name, attrs))
        .collect();
    print_rows(rows, format)
}
