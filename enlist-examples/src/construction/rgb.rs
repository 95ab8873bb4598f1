#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[enlist::impl_from_args]
impl Rgb {
    #[enlist::constructor]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    #[enlist::constructor]
    pub const fn gray(level: u8) -> Self {
        Self(level, level, level)
    }

    /// Black for unknown names.
    #[enlist::constructor]
    pub fn named(name: &str) -> Rgb {
        match name {
            "white" => Self::gray(255),
            "navy" => Self::new(0, 0, 128),
            "teal" => Self::new(0, 128, 128),
            _ => Self::gray(0),
        }
    }
}
