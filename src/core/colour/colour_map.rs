use crate::core::data::colour::Colour;
use std::error::Error;

/// Maps a per-pixel value (usually an escape count) to a colour.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, Box<dyn Error>>;

    fn display_name(&self) -> &str;
}
