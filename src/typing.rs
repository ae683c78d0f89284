//! Typewriter effect over a fixed, wrapping list of phrases.
//!
//! The animator never touches a timer itself. `step` produces the next frame
//! and the delay until the following one; `tick` layers a millisecond clock
//! on top so drivers and tests can advance time explicitly.

use crate::config::TypingConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypingState {
    pub word_index: usize,
    pub char_index: usize,
    pub is_deleting: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

pub struct TypingAnimator {
    phrases: Vec<Vec<char>>,
    type_tick_ms: u32,
    delete_tick_ms: u32,
    full_pause_ms: u32,
    empty_pause_ms: u32,
    state: TypingState,
    next_due_ms: u64,
    running: bool,
}

impl TypingAnimator {
    /// Returns `None` when no non-empty phrase remains.
    pub fn new(config: &TypingConfig) -> Option<Self> {
        let phrases: Vec<Vec<char>> = config
            .phrases
            .iter()
            .filter(|phrase| !phrase.is_empty())
            .map(|phrase| phrase.chars().collect())
            .collect();

        if phrases.is_empty() {
            return None;
        }

        Some(Self {
            phrases,
            type_tick_ms: config.type_tick_ms,
            delete_tick_ms: config.delete_tick_ms,
            full_pause_ms: config.full_pause_ms,
            empty_pause_ms: config.empty_pause_ms,
            state: TypingState::default(),
            next_due_ms: 0,
            running: true,
        })
    }

    #[cfg(test)]
    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    /// Number of steps after which the display sequence repeats.
    #[cfg(test)]
    pub fn period_steps(&self) -> usize {
        self.phrases.iter().map(|phrase| phrase.len() * 2).sum()
    }

    pub fn step(&mut self) -> TypingFrame {
        let word = &self.phrases[self.state.word_index];

        let mut delay_ms = if self.state.is_deleting {
            self.state.char_index = self.state.char_index.saturating_sub(1);
            self.delete_tick_ms
        } else {
            self.state.char_index = (self.state.char_index + 1).min(word.len());
            self.type_tick_ms
        };
        let text: String = word[..self.state.char_index].iter().collect();

        if !self.state.is_deleting && self.state.char_index == word.len() {
            delay_ms = self.full_pause_ms;
            self.state.is_deleting = true;
        } else if self.state.is_deleting && self.state.char_index == 0 {
            self.state.is_deleting = false;
            self.state.word_index = (self.state.word_index + 1) % self.phrases.len();
            delay_ms = self.empty_pause_ms;
        }

        TypingFrame { text, delay_ms }
    }

    /// Advances at most one step if the next frame is due at `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Option<TypingFrame> {
        if !self.running || now_ms < self.next_due_ms {
            return None;
        }

        let frame = self.step();
        self.next_due_ms = now_ms.saturating_add(u64::from(frame.delay_ms));
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(phrases: &[&str]) -> TypingAnimator {
        let config = TypingConfig {
            phrases: phrases.iter().map(ToString::to_string).collect(),
            ..TypingConfig::default()
        };
        TypingAnimator::new(&config).expect("phrases are non-empty")
    }

    #[test]
    fn empty_phrase_list_skips_initialization() {
        let config = TypingConfig {
            phrases: vec![String::new()],
            ..TypingConfig::default()
        };
        assert!(TypingAnimator::new(&config).is_none());
    }

    #[test]
    fn grows_with_pause_then_shrinks_with_pause() {
        let mut typing = animator(&["Hey"]);

        let frames: Vec<TypingFrame> = (0..6).map(|_| typing.step()).collect();
        let texts: Vec<&str> = frames.iter().map(|frame| frame.text.as_str()).collect();
        let delays: Vec<u32> = frames.iter().map(|frame| frame.delay_ms).collect();

        assert_eq!(texts, ["H", "He", "Hey", "He", "H", ""]);
        assert_eq!(delays, [100, 100, 2_000, 50, 50, 500]);
        assert_eq!(typing.state(), TypingState::default());
    }

    #[test]
    fn cycles_through_phrases_and_wraps() {
        let mut typing = animator(&["Software Developer", "Web Developer"]);
        let period = typing.period_steps();
        assert_eq!(period, 2 * (18 + 13));

        let first_cycle: Vec<String> = (0..period).map(|_| typing.step().text).collect();
        assert_eq!(first_cycle[17], "Software Developer");
        assert_eq!(first_cycle[35], "");
        assert_eq!(first_cycle[36], "W");
        assert_eq!(first_cycle[48], "Web Developer");
        assert_eq!(first_cycle[period - 1], "");

        let second_cycle: Vec<String> = (0..period).map(|_| typing.step().text).collect();
        assert_eq!(first_cycle, second_cycle);
    }

    #[test]
    fn period_duration_sums_ticks_and_pauses() {
        let mut typing = animator(&["Software Developer", "Web Developer"]);
        let total: u64 = (0..typing.period_steps())
            .map(|_| u64::from(typing.step().delay_ms))
            .sum();

        let per_phrase = |len: u64| (len - 1) * 100 + 2_000 + (len - 1) * 50 + 500;
        assert_eq!(total, per_phrase(18) + per_phrase(13));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut typing = animator(&["héllo"]);
        let texts: Vec<String> = (0..3).map(|_| typing.step().text).collect();
        assert_eq!(texts, ["h", "hé", "hél"]);
    }

    #[test]
    fn tick_follows_the_injected_clock() {
        let mut typing = animator(&["ab"]);

        assert_eq!(typing.tick(0).map(|frame| frame.text), Some("a".to_string()));
        assert_eq!(typing.tick(99), None);
        assert_eq!(typing.tick(100).map(|frame| frame.text), Some("ab".to_string()));
        assert_eq!(typing.next_due_ms(), 2_100);
        assert_eq!(typing.tick(2_099), None);
        assert_eq!(typing.tick(2_100).map(|frame| frame.text), Some("a".to_string()));
    }

    #[test]
    fn stop_ends_the_loop() {
        let mut typing = animator(&["ab"]);
        assert!(typing.tick(0).is_some());

        typing.stop();
        assert!(!typing.is_running());
        assert_eq!(typing.tick(10_000), None);
    }
}
