//! Feynman Classifier - decomposes a reaction into interaction vertices.
//!
//! ```text
//! Reaction ─► Validator ─► expand composites ─► Spectator Separator
//!                                                    │ interacting set
//!                                                    ▼
//!        Flavor Change ─► Strong ─► Electromagnetic ─► Weak ─► remainder
//! ```
//!
//! Each stage consumes particle pairs from what the previous stage left and
//! passes the rest on, so every interacting particle instance ends up in
//! exactly one pair or in the unclassified remainder. Matching is greedy
//! first-match in input order; it never backtracks, and the stage order
//! decides which interaction wins when a pair qualifies for several.

pub mod error;
pub mod matching;
pub mod pipeline;
pub mod record;
pub mod spectator;
pub mod stages;
pub mod traits;

pub use error::{ClassifierError, ClassifierResult};
pub use pipeline::{ClassificationReport, Classifier, ClassifierConfig};
pub use record::{
    ElectromagneticPairs, FlavorChangePairs, InteractionKind, InteractionRecord, StagePairs,
    StrongPairs, WeakPairs,
};
pub use spectator::{separate, Separation};
pub use stages::{
    canonical_stages, ElectromagneticStage, FlavorChangeStage, StrongStage, WeakStage,
};
pub use traits::{InteractionStage, StageOutput};
