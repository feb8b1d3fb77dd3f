//! Feynman Types - the particle data model shared by every Feynman crate.
//!
//! ## Contents
//!
//! - [`ParticleAttributes`]: immutable per-particle data (charge, baryon number,
//!   per-family lepton numbers, spin, family tag, mass, constituents).
//! - [`Reaction`]: an ordered `initial -> final` pair of particle sequences.
//! - [`AttributeTable`]: the read-only lookup every validation and
//!   classification stage consumes, and [`ParticleTable`], the JSON-backed
//!   implementation with a bundled standard table.
//!
//! Charge, baryon number and spin are exact [`Rational64`] values so that
//! fractional quark quantum numbers sum without floating-point drift.

pub mod error;
pub mod particle;
pub mod rational;
pub mod reaction;
pub mod table;

pub use error::{TypesError, TypesResult};
pub use particle::{
    Family, LeptonFlavor, LeptonNumbers, ParticleAttributes, ParticleCategory, ParticleName,
};
pub use reaction::{ParticlePair, Reaction, Side, MAX_COMPOSITE_DEPTH};
pub use table::{AttributeTable, ParticleTable};

pub use num_rational::Rational64;
