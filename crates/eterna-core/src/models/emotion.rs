use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the four tracked emotions. Neutral is a residual, not a tracked emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anxiety,
    Anger,
}

impl Emotion {
    /// Fixed iteration order. Ties during dominant selection resolve to the
    /// earliest emotion in this list.
    pub const ALL: [Emotion; 4] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anxiety,
        Emotion::Anger,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Sadness => "sadness",
            Self::Anxiety => "anxiety",
            Self::Anger => "anger",
        }
    }

    /// Highest of four percentages given in [`Emotion::ALL`] order. Ties go to
    /// the earliest emotion. `None` when every value is zero.
    pub fn dominant_of(values: [u8; 4]) -> Option<Emotion> {
        let mut best: Option<(Emotion, u8)> = None;
        for (emotion, value) in Self::ALL.into_iter().zip(values) {
            match best {
                _ if value == 0 => {}
                Some((_, top)) if top >= value => {}
                _ => best = Some((emotion, value)),
            }
        }
        best.map(|(e, _)| e)
    }

    /// Position in [`Emotion::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Joy => 0,
            Self::Sadness => 1,
            Self::Anxiety => 2,
            Self::Anger => 3,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
