// ui/mod.rs - Terminal rendering for the editor shell

pub mod renderer;
pub mod theme;
pub mod widgets;

pub use theme::Theme;
