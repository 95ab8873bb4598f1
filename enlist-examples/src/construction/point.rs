#[derive(enlist::FromArgs, Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
