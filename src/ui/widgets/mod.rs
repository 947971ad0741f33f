// ui/widgets/mod.rs - UI widgets

pub mod editor_pane;
pub mod status_bar;
