//! Random emoji source for new entries

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Emoji offered when the config does not override the set
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "🎉", "🚀", "✅", "🔥", "✨", "🐛", "🛠️", "📦", "📈", "🧪", "💡", "🎯",
    "🚧", "📝", "🤝", "🏁", "⚡", "🌱", "🔍", "🧹", "📣", "🎨", "🔒", "☕",
];

/// Number of recently handed out emoji to avoid by default
pub const DEFAULT_RECENT_WINDOW: usize = 3;

/// Supplies emoji for the first entry and for every added one.
pub trait EmojiSource {
    /// Emoji for the entry a session starts with
    fn seed(&mut self) -> String;

    /// Emoji for a newly added entry
    fn next(&mut self) -> String;
}

/// Picks uniformly from a fixed candidate set, skipping recent picks.
pub struct RandomEmoji {
    candidates: Vec<String>,
    recent: VecDeque<String>,
    window: usize,
    rng: StdRng,
}

impl RandomEmoji {
    pub fn new(candidates: Vec<String>, window: usize) -> Self {
        Self::with_rng(candidates, window, StdRng::from_entropy())
    }

    /// Deterministic source, for tests
    pub fn seeded(candidates: Vec<String>, window: usize, seed: u64) -> Self {
        Self::with_rng(candidates, window, StdRng::seed_from_u64(seed))
    }

    fn with_rng(candidates: Vec<String>, window: usize, rng: StdRng) -> Self {
        let candidates = if candidates.is_empty() {
            default_candidates()
        } else {
            candidates
        };
        // Room for at least the previous pick, never the whole set
        let window = match candidates.len() {
            0 | 1 => 0,
            len => window.clamp(1, len - 1),
        };

        Self {
            candidates,
            recent: VecDeque::with_capacity(window),
            window,
            rng,
        }
    }

    fn pick(&mut self) -> String {
        let fresh: Vec<&String> = self
            .candidates
            .iter()
            .filter(|c| !self.recent.contains(c))
            .collect();

        let choice = fresh
            .choose(&mut self.rng)
            .map(|c| (*c).clone())
            .or_else(|| self.candidates.first().cloned())
            .unwrap_or_default();

        if self.window > 0 {
            if self.recent.len() == self.window {
                self.recent.pop_front();
            }
            self.recent.push_back(choice.clone());
        }
        choice
    }
}

impl Default for RandomEmoji {
    fn default() -> Self {
        Self::new(default_candidates(), DEFAULT_RECENT_WINDOW)
    }
}

impl EmojiSource for RandomEmoji {
    fn seed(&mut self) -> String {
        self.recent.clear();
        self.pick()
    }

    fn next(&mut self) -> String {
        self.pick()
    }
}

pub fn default_candidates() -> Vec<String> {
    DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect()
}
