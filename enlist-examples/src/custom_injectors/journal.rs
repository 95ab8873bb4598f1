use std::fmt;

/// Space-separated words and numbers.
#[derive(Default, Debug)]
pub struct Journal {
    text: String,
}

impl Journal {
    fn separate(&mut self) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
    }
}

impl enlist::Inject<&str> for Journal {
    fn inject(&mut self, word: &str) {
        self.separate();
        self.text.push_str(word);
    }
}

impl enlist::Inject<i32> for Journal {
    fn inject(&mut self, number: i32) {
        use fmt::Write as _;
        self.separate();
        let _ = write!(self.text, "{number}");
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
