//! Typed-text banner state machine.
//!
//! Each [`Typewriter::step`] yields the text to display and how long to wait
//! before the next step: type a phrase one character at a time, hold it,
//! delete it one character at a time, then move to the next phrase.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::consts::{DELETE_DELAY_MS, HOLD_DELAY_MS, TYPE_DELAY_MS};

/// One frame of banner output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    /// Returns `None` for an empty phrase list; the banner then stays blank.
    pub fn new<I, S>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        if phrases.is_empty() {
            return None;
        }
        Some(Self { phrases, phrase_index: 0, shown: 0, deleting: false })
    }

    #[cfg(test)]
    pub(crate) fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Advance one character and report what to render.
    pub fn step(&mut self) -> TypingStep {
        let len = self.phrases[self.phrase_index].len();

        let delay_ms = if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            if self.shown == 0 {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                TYPE_DELAY_MS
            } else {
                DELETE_DELAY_MS
            }
        } else {
            self.shown = (self.shown + 1).min(len);
            if self.shown == len {
                self.deleting = true;
                HOLD_DELAY_MS
            } else {
                TYPE_DELAY_MS
            }
        };

        TypingStep { text: self.visible_text(), delay_ms }
    }

    fn visible_text(&self) -> String {
        self.phrases[self.phrase_index].iter().take(self.shown).collect()
    }
}
