pub mod electromagnetic;
pub mod flavor_change;
pub mod strong;
pub mod weak;

pub use electromagnetic::ElectromagneticStage;
pub use flavor_change::FlavorChangeStage;
pub use strong::StrongStage;
pub use weak::WeakStage;

use crate::traits::InteractionStage;

/// The four stages in canonical priority order.
pub fn canonical_stages() -> Vec<Box<dyn InteractionStage>> {
    vec![
        Box::new(FlavorChangeStage),
        Box::new(StrongStage),
        Box::new(ElectromagneticStage),
        Box::new(WeakStage),
    ]
}
