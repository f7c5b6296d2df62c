use crate::constants::TAGLINES;

/// Cycles through a fixed list of taglines, wrapping at the end.
#[derive(Clone, Debug)]
pub struct TaglineRotator {
    lines: Vec<String>,
    index: usize,
}

impl TaglineRotator {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.lines.get(self.index).map(String::as_str)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next tagline and return it.
    pub fn advance(&mut self) -> Option<&str> {
        if self.lines.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.lines.len();
        self.current()
    }
}

impl Default for TaglineRotator {
    fn default() -> Self {
        Self::new(TAGLINES)
    }
}
