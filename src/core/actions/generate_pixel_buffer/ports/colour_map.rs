use crate::core::data::colour::Colour;
use std::error::Error;

/// Turns one per-pixel result into a colour.
pub trait ColourMap<T> {
    type Failure: Error;

    fn map(&self, value: T) -> Result<Colour, Self::Failure>;

    fn display_name(&self) -> &str;
}
