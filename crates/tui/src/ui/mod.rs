//! UI layer: components, theming, widgets, and the terminal runtime.

pub mod components;
pub mod main_component;
pub mod preview;
pub mod runtime;
pub mod theme;
pub mod widgets;
