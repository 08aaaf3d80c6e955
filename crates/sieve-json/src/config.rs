/// What to do with NaN and infinite floats, which JSON cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonFiniteFloats {
    #[default]
    Error,
    /// Emit `null` in their place.
    Null,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub non_finite_floats: NonFiniteFloats,
}
