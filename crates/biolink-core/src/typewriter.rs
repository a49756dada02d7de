//! Looping type / pause / delete animation over a fixed phrase list.
//!
//! The machine is driven by one rescheduled delay: the owner waits
//! [`Typewriter::next_delay`], calls [`Typewriter::advance`], and repeats.
//! Timing is relative only; there is no drift correction.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{TYPEWRITER_DELETE_SPEED_MS, TYPEWRITER_PAUSE_MS, TYPEWRITER_SPEED_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    /// Delay before each typed character
    #[serde(rename = "speedMs")]
    pub speed: u64,
    /// Delay before each deleted character
    #[serde(rename = "deleteSpeedMs")]
    pub delete_speed: u64,
    /// Hold time once a phrase is fully typed
    #[serde(rename = "pauseMs")]
    pub pause: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            speed: TYPEWRITER_SPEED_MS,
            delete_speed: TYPEWRITER_DELETE_SPEED_MS,
            pause: TYPEWRITER_PAUSE_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    timing: TypewriterTiming,
    index: usize,
    /// Number of chars of the current phrase on screen
    typed: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, timing: TypewriterTiming) -> Self {
        Self {
            phrases,
            timing,
            index: 0,
            typed: 0,
            phase: Phase::Typing,
        }
    }

    /// Back to the first phrase, empty, typing
    pub fn reset(&mut self) {
        self.index = 0;
        self.typed = 0;
        self.phase = Phase::Typing;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Currently rendered substring
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return "";
        };
        match phrase.char_indices().nth(self.typed) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// How long to wait before the next [`advance`](Self::advance).
    /// `None` when there is nothing to animate.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.phrases.is_empty() {
            return None;
        }
        let ms = match self.phase {
            Phase::Typing => self.timing.speed,
            Phase::Pausing => self.timing.pause,
            Phase::Deleting => self.timing.delete_speed,
        };
        Some(Duration::from_millis(ms))
    }

    /// Perform one tick of the state machine
    pub fn advance(&mut self) {
        let Some(phrase) = self.phrases.get(self.index) else {
            return;
        };
        let len = phrase.chars().count();

        match self.phase {
            Phase::Typing => {
                if self.typed < len {
                    self.typed += 1;
                }
                if self.typed >= len {
                    self.phase = Phase::Pausing;
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                if self.typed == 0 {
                    self.next_phrase();
                }
            }
            Phase::Deleting => {
                self.typed = self.typed.saturating_sub(1);
                if self.typed == 0 {
                    self.next_phrase();
                }
            }
        }
    }

    fn next_phrase(&mut self) {
        self.index = (self.index + 1) % self.phrases.len();
        self.typed = 0;
        self.phase = Phase::Typing;
    }
}
