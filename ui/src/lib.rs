//! Shared UI crate for Phonescope. All chart logic and views live here.

pub mod core;
pub mod views;

pub mod components {
    pub mod chart;
    pub mod controls;
    pub mod tooltip;

    pub use chart::Chart;
    pub use controls::ControlBar;
    pub use tooltip::TooltipOverlay;
}
