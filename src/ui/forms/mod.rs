//! Form rendering module
//!
//! - `field_renderer`: one field with its validation markers
//! - `intake_form`: the scrolling sectioned form and its actions row

mod field_renderer;
mod intake_form;

pub use intake_form::draw as draw_intake_form;
