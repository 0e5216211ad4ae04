//! Form rendering module
//!
//! - `field_renderer`: bordered inputs with inline indicators
//! - `lead_form`: the visible step and its step/submit buttons

mod field_renderer;
mod lead_form;

pub use lead_form::draw as draw_lead_form;
