//! "Decoder" text reveal: random glyphs resolve into the real text left to right.

use crate::constants::{SCRAMBLE_GLYPHS, SCRAMBLE_REVEAL_PER_TICK};
use rand::Rng;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrambleFrame {
    pub text: String,
    /// Set on the frame that shows the full original text.
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct ScrambleText {
    original: Vec<char>,
    glyphs: Vec<char>,
    revealed: f32,
    reveal_per_tick: f32,
    finished: bool,
}

impl ScrambleText {
    pub fn new(text: &str) -> Self {
        Self::with_glyphs(text, SCRAMBLE_GLYPHS)
    }

    pub fn with_glyphs(text: &str, glyphs: &str) -> Self {
        let mut glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            glyphs.push('_');
        }
        Self {
            original: text.chars().collect(),
            glyphs,
            revealed: 0.0,
            reveal_per_tick: SCRAMBLE_REVEAL_PER_TICK,
            finished: false,
        }
    }

    pub fn original(&self) -> String {
        self.original.iter().collect()
    }

    /// Number of leading characters currently shown unscrambled.
    pub fn revealed_len(&self) -> usize {
        (self.revealed.ceil() as usize).min(self.original.len())
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Ticks needed from a fresh start, including the final full-text frame.
    pub fn total_ticks(&self) -> usize {
        (self.original.len() as f32 / self.reveal_per_tick).ceil() as usize + 1
    }

    /// Produce the next frame and advance the reveal point.
    pub fn tick(&mut self, rng: &mut impl Rng) -> ScrambleFrame {
        if self.finished {
            return ScrambleFrame {
                text: self.original(),
                done: true,
            };
        }
        let text = self
            .original
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if (i as f32) < self.revealed {
                    c
                } else {
                    self.glyphs[rng.gen_range(0..self.glyphs.len())]
                }
            })
            .collect();
        let done = self.revealed >= self.original.len() as f32;
        self.finished = done;
        self.revealed += self.reveal_per_tick;
        ScrambleFrame { text, done }
    }
}
