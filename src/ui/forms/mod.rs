//! Form rendering module
//!
//! - `field_renderer`: measurement field with its paired slider
//! - `risk_form`: the assessment form and its button

mod field_renderer;
mod risk_form;

pub use risk_form::draw as draw_risk_form;
