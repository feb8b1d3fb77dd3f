//! Particle attribute tables.
//!
//! The core only ever sees [`AttributeTable`]; [`ParticleTable`] is the
//! JSON-backed implementation, keyed by canonical particle name.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::{TypesError, TypesResult};
use crate::particle::{ParticleAttributes, ParticleName};

const STANDARD_TABLE: &str = include_str!("../data/standard_particles.json");

/// Read-only attribute lookup shared by validation and classification.
pub trait AttributeTable: Send + Sync {
    /// Attributes of `name`, or `None` when the table has no such particle.
    fn lookup(&self, name: &ParticleName) -> Option<&ParticleAttributes>;

    /// Like [`lookup`](Self::lookup), but a miss is an `UnknownParticle` error.
    fn get(&self, name: &ParticleName) -> TypesResult<&ParticleAttributes> {
        self.lookup(name)
            .ok_or_else(|| TypesError::UnknownParticle(name.clone()))
    }
}

/// In-memory particle table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleTable {
    particles: BTreeMap<ParticleName, ParticleAttributes>,
}

impl ParticleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled table of Standard Model particles and common hadrons.
    pub fn standard() -> TypesResult<Self> {
        Self::from_json_str(STANDARD_TABLE)
    }

    /// Parse a JSON object keyed by canonical name.
    pub fn from_json_str(json: &str) -> TypesResult<Self> {
        let particles: BTreeMap<ParticleName, ParticleAttributes> = serde_json::from_str(json)?;
        let table = Self { particles };
        table.validate()?;
        debug!(particles = table.len(), "Loaded particle table");
        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> TypesResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Insert or replace one particle.
    pub fn insert(&mut self, name: impl Into<ParticleName>, attrs: ParticleAttributes) {
        self.particles.insert(name.into(), attrs);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particles in canonical-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParticleName, &ParticleAttributes)> {
        self.particles.iter()
    }

    /// Check that masses are physical and every constituent is itself in the table.
    pub fn validate(&self) -> TypesResult<()> {
        for (name, attrs) in &self.particles {
            if !attrs.mass.is_finite() || attrs.mass < 0.0 {
                return Err(TypesError::InvalidAttribute {
                    particle: name.clone(),
                    field: "mass".to_string(),
                    reason: format!("{} is not a finite non-negative mass", attrs.mass),
                });
            }
            if let Some(missing) = attrs
                .content
                .iter()
                .find(|constituent| !self.particles.contains_key(*constituent))
            {
                return Err(TypesError::InvalidAttribute {
                    particle: name.clone(),
                    field: "content".to_string(),
                    reason: format!("constituent '{}' is not in the table", missing),
                });
            }
        }
        Ok(())
    }
}

impl AttributeTable for ParticleTable {
    fn lookup(&self, name: &ParticleName) -> Option<&ParticleAttributes> {
        self.particles.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::{LeptonFlavor, ParticleCategory};
    use crate::reaction::Reaction;
    use num_rational::Rational64;

    #[test]
    fn standard_table_loads() {
        let table = ParticleTable::standard().unwrap();
        assert!(table.len() > 40);

        let up = table.get(&"up".into()).unwrap();
        assert_eq!(up.charge, Rational64::new(2, 3));
        assert_eq!(up.baryon_number, Rational64::new(1, 3));
        assert_eq!(up.family_magnitude(), Some(1));

        let positron = table.get(&"positron".into()).unwrap();
        assert_eq!(positron.lepton_number.get(LeptonFlavor::Electron), -1);
        assert_eq!(positron.flavor_tag(), Some("e"));
        assert!(positron.is_antiparticle());
    }

    #[test]
    fn standard_hadrons_sum_to_their_constituents() {
        let table = ParticleTable::standard().unwrap();
        for (name, attrs) in table.iter().filter(|(_, a)| a.is_composite()) {
            let expanded = Reaction::new([name.clone()], Vec::<ParticleName>::new())
                .expand_composites(&table)
                .unwrap();
            let charge: Rational64 = expanded
                .initial_state
                .iter()
                .map(|n| table.get(n).unwrap().charge)
                .sum();
            let baryon: Rational64 = expanded
                .initial_state
                .iter()
                .map(|n| table.get(n).unwrap().baryon_number)
                .sum();
            assert_eq!(charge, attrs.charge, "charge of {}", name);
            assert_eq!(baryon, attrs.baryon_number, "baryon number of {}", name);
        }
    }

    #[test]
    fn missing_particle_is_unknown() {
        let table = ParticleTable::standard().unwrap();
        let err = table.get(&"selectron".into()).unwrap_err();
        assert!(matches!(err, TypesError::UnknownParticle(_)));
        assert!(table.lookup(&"selectron".into()).is_none());
    }

    #[test]
    fn rejects_negative_mass() {
        let json = r#"{"tachyon": {"symbol": "T", "category": "lepton", "mass": -1.0}}"#;
        let err = ParticleTable::from_json_str(json).unwrap_err();
        assert!(matches!(err, TypesError::InvalidAttribute { ref field, .. } if field == "mass"));
    }

    #[test]
    fn rejects_dangling_constituent() {
        let json = r#"{"proton": {"symbol": "p", "category": "baryon", "content": ["up", "up", "down"]}}"#;
        let err = ParticleTable::from_json_str(json).unwrap_err();
        assert!(matches!(err, TypesError::InvalidAttribute { ref field, .. } if field == "content"));
    }

    #[test]
    fn rejects_bad_family() {
        let json = r#"{"x": {"symbol": "x", "category": "quark", "family": "one"}}"#;
        assert!(matches!(
            ParticleTable::from_json_str(json),
            Err(TypesError::Json(_))
        ));
    }

    #[test]
    fn insert_replaces() {
        let mut table = ParticleTable::new();
        table.insert("photon", ParticleAttributes::new("gamma", ParticleCategory::GaugeBoson));
        table.insert(
            "photon",
            ParticleAttributes::new("gamma", ParticleCategory::GaugeBoson).with_mass(0.0),
        );
        assert_eq!(table.len(), 1);
    }
}
