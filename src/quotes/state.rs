//! Explicit per-fetch state, replacing ad-hoc loading/translating flags.

/// The phase one fetch sequence is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    /// Waiting on the quote source.
    Fetching,
    /// Quote in hand, waiting on the translation resolver.
    Translating,
    Done,
}

impl FetchPhase {
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Fetching | Self::Translating)
    }

    /// Spinner label for busy phases; empty otherwise.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle | Self::Done => "",
            Self::Fetching => "Loading...",
            Self::Translating => "ဘာသာပြန်နေသည်...",
        }
    }
}

/// One fetch-and-translate sequence.
///
/// Sequences are independent: a re-fetch simply starts a new sequence, and
/// the last writer wins.
#[derive(Debug, Default)]
pub struct FetchSequence {
    phase: FetchPhase,
}

impl FetchSequence {
    pub const fn new() -> Self {
        Self {
            phase: FetchPhase::Idle,
        }
    }

    pub const fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub const fn begin_fetch(&mut self) {
        self.phase = FetchPhase::Fetching;
    }

    pub const fn begin_translate(&mut self) {
        self.phase = FetchPhase::Translating;
    }

    pub const fn finish(&mut self) {
        self.phase = FetchPhase::Done;
    }
}
