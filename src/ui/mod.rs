//! Presentation shell: navigation, static pages and the analysis page.

pub mod analytics;
pub mod pages;
pub mod pie;
pub mod plot;
pub mod sidebar;
pub mod state_map;
