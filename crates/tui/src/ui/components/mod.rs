//! UI components: the stage and the shared component trait.

pub mod component;
pub mod stage;

pub use component::*;
pub use stage::StageComponent;
