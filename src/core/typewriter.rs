//! Typewriter text reveal.
//!
//! The reveal is a pure function of elapsed time: nothing is visible until
//! `delay` has passed, then one more character becomes visible every
//! `speed`. [`crate::core::reveal`] drives this on real (or paused) tokio
//! time.
//!
//! Characters are Unicode scalar values, so a prefix never splits a
//! multi-byte character.

use std::time::Duration;

use thiserror::Error;

/// Default pause before the first character
pub const DEFAULT_DELAY: Duration = Duration::ZERO;

/// Default time per character
pub const DEFAULT_SPEED: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypewriterError {
    #[error("Reveal speed must be greater than zero")]
    ZeroSpeed,
}

/// Where a reveal is at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Waiting for the start delay
    Pending,

    /// Showing the first `visible` characters
    Revealing { visible: usize },

    /// Whole text visible; terminal
    Complete,
}

/// Number of characters visible after `elapsed`.
///
/// `0` before `delay`; afterwards one character per whole `speed` interval,
/// capped at `total`.
pub fn visible_chars(elapsed: Duration, delay: Duration, speed: Duration, total: usize) -> usize {
    let Some(since_start) = elapsed.checked_sub(delay) else {
        return 0;
    };

    if speed.is_zero() {
        return total;
    }

    let ticks = since_start.as_nanos() / speed.as_nanos();
    usize::try_from(ticks).unwrap_or(usize::MAX).min(total)
}

/// Reveal configuration for one piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    delay: Duration,
    speed: Duration,
    total: usize,
}

impl Typewriter {
    /// Create a reveal with the default delay and speed
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            text,
            delay: DEFAULT_DELAY,
            speed: DEFAULT_SPEED,
            total,
        }
    }

    /// Set the pause before the first character
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the time per character. Must be non-zero.
    pub fn with_speed(mut self, speed: Duration) -> Result<Self, TypewriterError> {
        if speed.is_zero() {
            return Err(TypewriterError::ZeroSpeed);
        }
        self.speed = speed;
        Ok(self)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Length of the text in characters
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Total time from start until the reveal completes
    pub fn duration(&self) -> Duration {
        let chars = u32::try_from(self.total).unwrap_or(u32::MAX);
        self.delay.saturating_add(self.speed.saturating_mul(chars))
    }

    /// The first `chars` characters of the text
    pub fn prefix(&self, chars: usize) -> &str {
        match self.text.char_indices().nth(chars) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    /// Number of characters visible after `elapsed`
    pub fn visible_at(&self, elapsed: Duration) -> usize {
        visible_chars(elapsed, self.delay, self.speed, self.total)
    }

    /// Visible text after `elapsed`
    pub fn prefix_at(&self, elapsed: Duration) -> &str {
        self.prefix(self.visible_at(elapsed))
    }

    /// Reveal state after `elapsed`
    pub fn state_at(&self, elapsed: Duration) -> RevealState {
        if elapsed < self.delay {
            return RevealState::Pending;
        }

        let visible = self.visible_at(elapsed);
        if visible >= self.total {
            RevealState::Complete
        } else {
            RevealState::Revealing { visible }
        }
    }
}
