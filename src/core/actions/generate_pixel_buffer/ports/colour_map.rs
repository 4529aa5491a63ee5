use crate::core::data::colour::Colour;

pub trait ColourMap {
    type Value;

    fn map(&self, value: Self::Value) -> Colour;

    fn display_name(&self) -> &str;
}
