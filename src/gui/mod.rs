// src/gui/mod.rs
pub mod chart;

pub use chart::EguiRenderer;
