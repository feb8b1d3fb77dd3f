//! Particle identities and their immutable attributes.

use std::borrow::Borrow;
use std::fmt;
use std::ops::{Add, Neg};
use std::str::FromStr;

use num_rational::Rational64;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::error::TypesError;
use crate::rational::{serde_rational, zero};

/// Canonical particle name (e.g. `"electron"`, `"sigma zero"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticleName(String);

impl ParticleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticleName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ParticleName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for ParticleName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Broad particle category as recorded in the attribute table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleCategory {
    Quark,
    Lepton,
    GaugeBoson,
    ScalarBoson,
    Baryon,
    Meson,
}

impl ParticleCategory {
    /// Baryons and mesons are bound states with constituents.
    pub fn is_hadron(&self) -> bool {
        matches!(self, Self::Baryon | Self::Meson)
    }

    pub fn is_boson(&self) -> bool {
        matches!(self, Self::GaugeBoson | Self::ScalarBoson)
    }
}

impl fmt::Display for ParticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Quark => "quark",
            Self::Lepton => "lepton",
            Self::GaugeBoson => "gauge boson",
            Self::ScalarBoson => "scalar boson",
            Self::Baryon => "baryon",
            Self::Meson => "meson",
        };
        f.write_str(label)
    }
}

/// The three lepton families, each with its own conserved lepton number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeptonFlavor {
    Electron,
    Muon,
    Tau,
}

impl LeptonFlavor {
    /// All families, in generation order.
    pub const ALL: [LeptonFlavor; 3] = [Self::Electron, Self::Muon, Self::Tau];
}

impl fmt::Display for LeptonFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Electron => "electron",
            Self::Muon => "muon",
            Self::Tau => "tau",
        };
        f.write_str(label)
    }
}

/// Per-family lepton numbers. Omitted families default to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LeptonNumbers {
    pub electron: i32,
    pub muon: i32,
    pub tau: i32,
}

impl LeptonNumbers {
    pub fn new(electron: i32, muon: i32, tau: i32) -> Self {
        Self {
            electron,
            muon,
            tau,
        }
    }

    pub fn get(&self, flavor: LeptonFlavor) -> i32 {
        match flavor {
            LeptonFlavor::Electron => self.electron,
            LeptonFlavor::Muon => self.muon,
            LeptonFlavor::Tau => self.tau,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.electron == 0 && self.muon == 0 && self.tau == 0
    }

    /// Sum across all three families.
    pub fn total(&self) -> i32 {
        self.electron + self.muon + self.tau
    }
}

impl Add for LeptonNumbers {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            electron: self.electron + rhs.electron,
            muon: self.muon + rhs.muon,
            tau: self.tau + rhs.tau,
        }
    }
}

impl Neg for LeptonNumbers {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            electron: -self.electron,
            muon: -self.muon,
            tau: -self.tau,
        }
    }
}

/// Family tag: a signed generation index with an optional lower-case flavor tag.
///
/// Written as `"1"`, `"-2"` (quarks; negative for antiquarks) or `"1e"`,
/// `"-2mu"` (leptons). The flavor tag is the tag with the generation digits
/// and sign stripped, so `"1e"` and `"-1e"` share the tag `"e"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Family {
    generation: i8,
    tag: Option<String>,
}

impl Family {
    pub fn new(generation: i8, tag: Option<&str>) -> Self {
        Self {
            generation,
            tag: tag.map(str::to_string),
        }
    }

    pub fn generation(&self) -> i8 {
        self.generation
    }

    /// Generation index without its particle/antiparticle sign.
    pub fn magnitude(&self) -> u8 {
        self.generation.unsigned_abs()
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

impl FromStr for Family {
    type Err = TypesError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || TypesError::InvalidFamily(text.to_string());
        let split = text
            .find(|c: char| c.is_ascii_lowercase())
            .unwrap_or(text.len());
        let (digits, tag) = text.split_at(split);

        if !tag.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(invalid());
        }
        let generation: i8 = digits.parse().map_err(|_| invalid())?;

        Ok(Self {
            generation,
            tag: (!tag.is_empty()).then(|| tag.to_string()),
        })
    }
}

impl TryFrom<String> for Family {
    type Error = TypesError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Family> for String {
    fn from(family: Family) -> Self {
        family.to_string()
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.generation, self.tag.as_deref().unwrap_or(""))
    }
}

/// Immutable attributes of one particle species.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleAttributes {
    /// Short symbol used in reaction strings (e.g. `"e-"`, `"pi0"`)
    pub symbol: String,
    /// Additional accepted spellings of the symbol
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latex: Option<String>,
    pub category: ParticleCategory,
    /// Rest mass in MeV
    #[serde(default)]
    pub mass: f64,
    #[serde(default = "zero", with = "serde_rational")]
    pub spin: Rational64,
    #[serde(default = "zero", with = "serde_rational")]
    pub charge: Rational64,
    #[serde(default = "zero", with = "serde_rational")]
    pub baryon_number: Rational64,
    #[serde(default)]
    pub lepton_number: LeptonNumbers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<Family>,
    /// Constituent particles, empty for elementary particles
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<ParticleName>,
}

impl ParticleAttributes {
    /// Minimal attributes for the given category; every quantum number zero.
    pub fn new(symbol: impl Into<String>, category: ParticleCategory) -> Self {
        Self {
            symbol: symbol.into(),
            aliases: Vec::new(),
            latex: None,
            category,
            mass: 0.0,
            spin: zero(),
            charge: zero(),
            baryon_number: zero(),
            lepton_number: LeptonNumbers::default(),
            family: None,
            content: Vec::new(),
        }
    }

    pub fn is_quark(&self) -> bool {
        self.category == ParticleCategory::Quark
    }

    pub fn is_lepton(&self) -> bool {
        self.category == ParticleCategory::Lepton
    }

    pub fn is_elementary_fermion(&self) -> bool {
        self.is_quark() || self.is_lepton()
    }

    pub fn is_composite(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn is_charged(&self) -> bool {
        !self.charge.is_zero()
    }

    /// Antiquarks carry negative baryon number, antileptons negative lepton number.
    pub fn is_antiparticle(&self) -> bool {
        if self.is_quark() {
            self.baryon_number.is_negative()
        } else if self.is_lepton() {
            self.lepton_number.total() < 0
        } else {
            false
        }
    }

    /// Flavor tag of the family (`"e"`, `"mu"`, `"tau"` for leptons).
    pub fn flavor_tag(&self) -> Option<&str> {
        self.family.as_ref().and_then(Family::tag)
    }

    /// Unsigned generation index.
    pub fn family_magnitude(&self) -> Option<u8> {
        self.family.as_ref().map(Family::magnitude)
    }

    /// TeX math for diagram labels, falling back to the plain symbol.
    pub fn tex(&self) -> &str {
        self.latex.as_deref().unwrap_or(&self.symbol)
    }

    /// Builder-style setters, used mostly by in-memory tables and tests.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_spin(mut self, spin: Rational64) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_charge(mut self, charge: Rational64) -> Self {
        self.charge = charge;
        self
    }

    pub fn with_baryon_number(mut self, baryon_number: Rational64) -> Self {
        self.baryon_number = baryon_number;
        self
    }

    pub fn with_lepton_number(mut self, lepton_number: LeptonNumbers) -> Self {
        self.lepton_number = lepton_number;
        self
    }

    pub fn with_family(mut self, family: Family) -> Self {
        self.family = Some(family);
        self
    }

    pub fn with_content<I, N>(mut self, content: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<ParticleName>,
    {
        self.content = content.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_parses_generation_and_tag() {
        let lepton: Family = "-2mu".parse().unwrap();
        assert_eq!(lepton.generation(), -2);
        assert_eq!(lepton.magnitude(), 2);
        assert_eq!(lepton.tag(), Some("mu"));

        let quark: Family = "3".parse().unwrap();
        assert_eq!(quark.generation(), 3);
        assert_eq!(quark.tag(), None);
    }

    #[test]
    fn family_rejects_garbage() {
        assert!("e".parse::<Family>().is_err());
        assert!("1E".parse::<Family>().is_err());
        assert!("1e2".parse::<Family>().is_err());
        assert!("".parse::<Family>().is_err());
    }

    #[test]
    fn family_round_trips_through_display() {
        for text in ["1", "-1", "1e", "-3tau"] {
            let family: Family = text.parse().unwrap();
            assert_eq!(family.to_string(), text);
        }
    }

    #[test]
    fn antiparticle_detection() {
        let antiup = ParticleAttributes::new("u~", ParticleCategory::Quark)
            .with_baryon_number(Rational64::new(-1, 3));
        assert!(antiup.is_antiparticle());

        let positron = ParticleAttributes::new("e+", ParticleCategory::Lepton)
            .with_lepton_number(LeptonNumbers::new(-1, 0, 0));
        assert!(positron.is_antiparticle());

        let photon = ParticleAttributes::new("gamma", ParticleCategory::GaugeBoson);
        assert!(!photon.is_antiparticle());
    }

    #[test]
    fn lepton_numbers_negate_and_add() {
        let muon = LeptonNumbers::new(0, 1, 0);
        assert!((muon + -muon).is_zero());
        assert_eq!(muon.get(LeptonFlavor::Muon), 1);
    }

    #[test]
    fn tex_label_falls_back_to_symbol() {
        let mut muon = ParticleAttributes::new("mu-", ParticleCategory::Lepton);
        assert_eq!(muon.tex(), "mu-");
        muon.latex = Some("\\mu^-".to_string());
        assert_eq!(muon.tex(), "\\mu^-");
    }

    #[test]
    fn attributes_deserialize_with_defaults() {
        let json = r#"{
            "symbol": "nu_e-",
            "category": "lepton",
            "spin": "1/2",
            "lepton_number": {"electron": 1},
            "family": "1e"
        }"#;
        let attrs: ParticleAttributes = serde_json::from_str(json).unwrap();
        assert_eq!(attrs.charge, Rational64::from_integer(0));
        assert_eq!(attrs.spin, Rational64::new(1, 2));
        assert_eq!(attrs.lepton_number.electron, 1);
        assert_eq!(attrs.flavor_tag(), Some("e"));
        assert!(!attrs.is_composite());
    }
}
