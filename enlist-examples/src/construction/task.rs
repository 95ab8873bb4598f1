#[derive(enlist::FromArgs, Debug)]
pub struct Task {
    pub title: &'static str,
    pub priority: u8,
    // every task starts undone
    #[enlist(default)]
    pub done: bool,
}
