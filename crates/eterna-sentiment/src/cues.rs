//! Cross-cutting regex cue groups and the degenerate-input fallback ladder.
//!
//! Both are ordered rule lists. Cue rules are tested independently against the
//! whole lowercased text and their bonuses accumulate. Fallback rules run in
//! order over the percentage distribution and assign fixed values.

use std::sync::LazyLock;

use eterna_core::Emotion;
use regex::Regex;

macro_rules! cue_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Authority / scolding ───────────────────────────────────────────────────
cue_pattern!(
    RE_AUTHORITY,
    r"(cops|police|authority|scolded|lectured|being told|questioned|interrogated|grilled|asked if|out of many|study properly|so they said|dismissed|not listened|ignored|accused|forced to|pushed|told off|bossed|targeted|called out|demanded|blamed|no reason|scapegoat|sarcastic|irony|mocked|ridiculed|shamed|insulted)"
);

// ── Memory / overwhelm ─────────────────────────────────────────────────────
cue_pattern!(
    RE_MEMORY_OVERWHELM,
    r"(hard to remember|can't remember|hard to recall|overwhelmed|confused|many things|blank|with so much|so much to remember|can't think|wasn't sure|mental block|cloudy|too much to handle|memory fails|forgot|out of many|anxiety|pressure|panic|scatterbrained|running late|afraid to)"
);

// ── Criticized / dismissed ─────────────────────────────────────────────────
cue_pattern!(
    RE_CRITICIZED,
    r"(scolded|told to|called out|humiliated|targeted|dismissed|not listened|criticized|made to feel|lectured|treated unfairly|misunderstood|picked on|bothered|nagged|yelled at|sarcastic remark|rolled my eyes|shut down|made fun of)"
);

// ── Fallback: accusation ───────────────────────────────────────────────────
cue_pattern!(
    RE_FALLBACK_ACCUSATION,
    r"(cops|police|authority|scolded|lectured|questioned|grilled|asked if|out of many|study properly|so they said|dismissed|not listened|ignored|accused|forced to|pushed|told off|bossed|targeted|called out|demanded|blamed|sarcastic|mocked|ridiculed|shamed|insulted)"
);

// ── Fallback: memory / overwhelm ───────────────────────────────────────────
cue_pattern!(
    RE_FALLBACK_MEMORY,
    r"(hard to remember|can't remember|overwhelmed|confused|blank|cannot focus|lost|memory|scatterbrained|panic|worry)"
);

/// A regex cue contributing fixed raw-score bonuses.
pub struct CueRule {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub bonuses: &'static [(Emotion, f64)],
}

impl CueRule {
    /// Whether the cue fires. A pattern that failed to compile never fires.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }
}

/// Cue groups in application order.
pub static CUE_RULES: [CueRule; 3] = [
    CueRule {
        name: "authority",
        regex: &RE_AUTHORITY,
        bonuses: &[(Emotion::Anger, 6.0)],
    },
    CueRule {
        name: "memory_overwhelm",
        regex: &RE_MEMORY_OVERWHELM,
        bonuses: &[(Emotion::Anxiety, 3.0), (Emotion::Sadness, 3.0)],
    },
    CueRule {
        name: "criticized",
        regex: &RE_CRITICIZED,
        bonuses: &[(Emotion::Anger, 3.0), (Emotion::Sadness, 2.0)],
    },
];

/// When a fallback rule fires.
pub enum FallbackTrigger {
    /// The pattern matches the lowercased text.
    Pattern(&'static LazyLock<Option<Regex>>),
    /// Every percentage is still zero after the earlier rules.
    StillFlat,
}

/// A rung of the degenerate-input ladder: assigns fixed percentages.
pub struct FallbackRule {
    pub name: &'static str,
    pub trigger: FallbackTrigger,
    pub assign: &'static [(Emotion, u8)],
}

/// Fallback rungs in application order.
pub static FALLBACK_RULES: [FallbackRule; 3] = [
    FallbackRule {
        name: "accusation",
        trigger: FallbackTrigger::Pattern(&RE_FALLBACK_ACCUSATION),
        assign: &[(Emotion::Anger, 10)],
    },
    FallbackRule {
        name: "memory",
        trigger: FallbackTrigger::Pattern(&RE_FALLBACK_MEMORY),
        assign: &[(Emotion::Anxiety, 8), (Emotion::Sadness, 8)],
    },
    FallbackRule {
        name: "mild_anger",
        trigger: FallbackTrigger::StillFlat,
        assign: &[(Emotion::Anger, 7)],
    },
];

/// A cue or fallback pattern that failed to compile and is therefore inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFailure {
    pub rule: &'static str,
    /// `"cue"` or `"fallback"`.
    pub group: &'static str,
}

/// Every cue or fallback pattern that failed to compile. Empty when healthy.
pub fn check_pattern_health() -> Vec<PatternFailure> {
    let cues = CUE_RULES
        .iter()
        .filter(|rule| rule.regex.is_none())
        .map(|rule| PatternFailure {
            rule: rule.name,
            group: "cue",
        });
    let fallbacks = FALLBACK_RULES.iter().filter_map(|rule| match rule.trigger {
        FallbackTrigger::Pattern(regex) if regex.is_none() => Some(PatternFailure {
            rule: rule.name,
            group: "fallback",
        }),
        _ => None,
    });
    cues.chain(fallbacks).collect()
}
