use std::collections::BTreeMap;

/// Counts how many times each character was inserted.
#[derive(Default, Debug)]
pub struct Tally {
    counts: BTreeMap<char, usize>,
}

impl Tally {
    pub fn count(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or_default()
    }
}

impl enlist::collection::Collection for Tally {
    type Element = char;
}

impl enlist::collection::Insert for Tally {
    fn insert(&mut self, ch: char) {
        *self.counts.entry(ch).or_default() += 1;
    }
}
