//! Feynman Diagram - TikZ-Feynman drawings of classified reactions.
//!
//! [`DiagramRenderer`] turns a [`ClassificationReport`](feynman_classifier::ClassificationReport)
//! into a standalone TeX document: one straight line per spectator and one
//! vertex block per consumed pair, labelled with the pair's mediator.
//! [`TexCompiler`] optionally runs `lualatex` over the result.

pub mod compile;
pub mod error;
pub mod render;

pub use compile::{clean_aux_files, write_tex, TexCompiler, TexOutput, AUX_EXTENSIONS};
pub use error::{DiagramError, DiagramResult};
pub use render::{DiagramConfig, DiagramRenderer, Placement};
