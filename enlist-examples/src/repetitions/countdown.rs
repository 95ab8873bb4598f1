/// Counts down to zero and stays there.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    next: u32,
}

impl From<u32> for Countdown {
    fn from(start: u32) -> Self {
        Self { next: start }
    }
}

impl Countdown {
    pub fn tick(&mut self) -> u32 {
        let current = self.next;
        self.next = self.next.saturating_sub(1);
        current
    }
}
