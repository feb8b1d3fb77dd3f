//! TikZ-Feynman source emission.
//!
//! Spectators become straight lines across the picture. Every consumed pair
//! becomes one vertex block with its mediator attached. Blocks are grouped by
//! interaction kind, in pipeline order, and stacked top to bottom; the layout
//! is a fixed grid and leaves routing to TikZ-Feynman.

use feynman_classifier::{separate, ClassificationReport, InteractionKind};
use feynman_types::{
    AttributeTable, ParticleAttributes, ParticleCategory, ParticleName, ParticlePair, Reaction,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DiagramError, DiagramResult};

/// Grid used to place lines and vertex blocks, in TikZ units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Distance between the incoming and outgoing columns (default: 6)
    pub width: f64,
    /// Vertical distance between two legs of one block (default: 1.5)
    pub leg_spacing: f64,
    /// Vertical distance between consecutive lines or blocks (default: 1)
    pub row_gap: f64,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            width: 6.0,
            leg_spacing: 1.5,
            row_gap: 1.0,
        }
    }
}

/// Where the two particles of a pair sit in the reaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// First particle comes in, second goes out
    Across,
    /// Both incoming: they annihilate into the mediator
    Initial,
    /// Both outgoing: the mediator produces them
    Final,
}

impl Placement {
    /// Place a pair given the interacting particles it was taken from.
    ///
    /// After spectator separation no name occurs on both sides, so a name's
    /// side is unambiguous. Pairs listed outgoing-first come back swapped.
    pub fn of<'p>(pair: &'p ParticlePair, interacting: &Reaction) -> (Self, &'p ParticleName, &'p ParticleName) {
        let incoming = |name: &ParticleName| interacting.initial_state.contains(name);
        match (incoming(&pair.0), incoming(&pair.1)) {
            (true, true) => (Self::Initial, &pair.0, &pair.1),
            (false, false) => (Self::Final, &pair.0, &pair.1),
            (true, false) => (Self::Across, &pair.0, &pair.1),
            (false, true) => (Self::Across, &pair.1, &pair.0),
        }
    }
}

/// TikZ-Feynman edge style for a particle line.
fn line_style(attrs: &ParticleAttributes) -> &'static str {
    match attrs.category {
        ParticleCategory::Quark | ParticleCategory::Lepton if attrs.is_antiparticle() => {
            "anti fermion"
        }
        ParticleCategory::Quark | ParticleCategory::Lepton => "fermion",
        ParticleCategory::GaugeBoson if attrs.symbol == "gamma" => "photon",
        ParticleCategory::GaugeBoson if attrs.symbol == "g" => "gluon",
        ParticleCategory::GaugeBoson => "boson",
        ParticleCategory::ScalarBoson => "scalar",
        ParticleCategory::Baryon | ParticleCategory::Meson => "plain",
    }
}

fn mediator_style(kind: InteractionKind) -> &'static str {
    match kind {
        InteractionKind::Strong => "gluon",
        InteractionKind::Electromagnetic => "photon",
        InteractionKind::FlavorChange | InteractionKind::Weak => "boson",
    }
}

fn point(x: f64, y: f64) -> String {
    format!("({}, {})", x, y)
}

/// Emits a standalone TikZ-Feynman document for a classification report.
#[derive(Clone, Debug, Default)]
pub struct DiagramRenderer {
    config: DiagramConfig,
}

impl DiagramRenderer {
    pub fn new(config: DiagramConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Render the report as a `.tex` document for `lualatex`.
    pub fn render(
        &self,
        report: &ClassificationReport,
        table: &dyn AttributeTable,
    ) -> DiagramResult<String> {
        let interacting = separate(&report.elemental).interacting;
        let mut body = String::new();
        let mut y = 0.0;

        if !report.spectators.is_empty() {
            body.push_str("    % spectators\n");
        }
        for (n, name) in report.spectators.iter().enumerate() {
            let attrs = lookup(table, name)?;
            body.push_str(&self.spectator_line(n, attrs, y));
            y -= self.config.row_gap;
        }

        let mut blocks = 0;
        for kind in InteractionKind::ALL {
            let pairs = report.interactions.pairs_of(kind);
            if pairs.is_empty() {
                continue;
            }
            body.push_str(&format!("    % {} ({})\n", kind, kind.mediator()));
            for pair in pairs {
                let (placement, first, second) = Placement::of(pair, &interacting);
                let legs = (lookup(table, first)?, lookup(table, second)?);
                body.push_str(&self.vertex_block(blocks, kind, placement, legs, y));
                y -= self.config.leg_spacing + self.config.row_gap;
                blocks += 1;
            }
        }

        if !report.remainder.is_empty() {
            body.push_str(&format!("    % unclassified: {}\n", report.remainder));
        }

        debug!(
            spectators = report.spectators.len(),
            vertices = blocks,
            "Diagram rendered"
        );

        let mut document = String::new();
        document.push_str(&format!("% {}\n", report.reaction));
        document.push_str("\\documentclass[tikz,border=10pt]{standalone}\n");
        document.push_str("\\usepackage[compat=1.1.0]{tikz-feynman}\n");
        document.push_str("\\begin{document}\n");
        document.push_str("\\begin{tikzpicture}\n");
        document.push_str("  \\begin{feynman}\n");
        document.push_str(&body);
        document.push_str("  \\end{feynman}\n");
        document.push_str("\\end{tikzpicture}\n");
        document.push_str("\\end{document}\n");
        Ok(document)
    }

    fn spectator_line(&self, n: usize, attrs: &ParticleAttributes, y: f64) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "    \\vertex (s{n}i) at {} {{\\({}\\)}};\n",
            point(0.0, y),
            attrs.tex()
        ));
        out.push_str(&format!(
            "    \\vertex (s{n}f) at {} {{\\({}\\)}};\n",
            point(self.config.width, y),
            attrs.tex()
        ));
        out.push_str(&format!(
            "    \\diagram* {{ (s{n}i) -- [{}] (s{n}f) }};\n",
            line_style(attrs)
        ));
        out
    }

    fn vertex_block(
        &self,
        n: usize,
        kind: InteractionKind,
        placement: Placement,
        (a, b): (&ParticleAttributes, &ParticleAttributes),
        y: f64,
    ) -> String {
        let w = self.config.width;
        let h = self.config.leg_spacing;
        let mid = y - h / 2.0;

        let (a_at, b_at, vertex_at, mediator_at) = match placement {
            Placement::Across => (point(0.0, y), point(w, y), point(w / 2.0, y), point(w / 2.0, y - h)),
            Placement::Initial => (point(0.0, y), point(0.0, y - h), point(w / 3.0, mid), point(2.0 * w / 3.0, mid)),
            Placement::Final => (point(w, y), point(w, y - h), point(2.0 * w / 3.0, mid), point(w / 3.0, mid)),
        };
        // Incoming legs are drawn into the vertex, outgoing legs out of it.
        let a_edge = match placement {
            Placement::Final => format!("(v{n}) -- [{}] (v{n}a)", line_style(a)),
            _ => format!("(v{n}a) -- [{}] (v{n})", line_style(a)),
        };
        let b_edge = match placement {
            Placement::Initial => format!("(v{n}b) -- [{}] (v{n})", line_style(b)),
            _ => format!("(v{n}) -- [{}] (v{n}b)", line_style(b)),
        };
        let mediator_edge = match placement {
            Placement::Final => format!("(v{n}m) -- [{}, edge label=\\({}\\)] (v{n})", mediator_style(kind), kind.mediator_tex()),
            _ => format!("(v{n}) -- [{}, edge label=\\({}\\)] (v{n}m)", mediator_style(kind), kind.mediator_tex()),
        };

        let mut out = String::new();
        out.push_str(&format!("    \\vertex (v{n}a) at {} {{\\({}\\)}};\n", a_at, a.tex()));
        out.push_str(&format!("    \\vertex (v{n}b) at {} {{\\({}\\)}};\n", b_at, b.tex()));
        out.push_str(&format!("    \\vertex (v{n}) at {};\n", vertex_at));
        out.push_str(&format!("    \\vertex (v{n}m) at {};\n", mediator_at));
        out.push_str("    \\diagram* {\n");
        out.push_str(&format!("      {},\n", a_edge));
        out.push_str(&format!("      {},\n", b_edge));
        out.push_str(&format!("      {},\n", mediator_edge));
        out.push_str("    };\n");
        out
    }
}

fn lookup<'t>(table: &'t dyn AttributeTable, name: &ParticleName) -> DiagramResult<&'t ParticleAttributes> {
    table
        .lookup(name)
        .ok_or_else(|| DiagramError::UnknownParticle(name.clone()))
}
