/// Path segment marking a swatch image.
pub const SWATCH_SEGMENT: &str = "/swatches/";

/// File name suffix of the large rendition.
pub const LARGE_SUFFIX: &str = "-l.jpg";

/// Whether an image `src` points at the large rendition of a swatch.
pub fn is_large_swatch(src: &str) -> bool {
    src.contains(SWATCH_SEGMENT) && src.ends_with(LARGE_SUFFIX)
}
