pub mod image_elements;
pub mod swatch_filter;
