//! The multi-pass scoring pipeline.
//!
//! Raw scores accumulate through the lexicon, cue, and symptom passes, are
//! adjusted for negation and intensifiers, then normalized to percentages.
//! The fallback ladder runs last, on the percentages.

use eterna_core::config::SentimentConfig;
use eterna_core::constants::MAX_PERCENTAGE;
use eterna_core::Emotion;

use crate::cues::{CueRule, FallbackRule, FallbackTrigger, CUE_RULES, FALLBACK_RULES};
use crate::lexicon::{
    DIRECT_WEIGHT, INDIRECT_WEIGHT, INTENSIFIER_MARKERS, INTENSIFIER_STEP, LEXICON,
    NEGATION_JOY_PENALTY, NEGATION_MARKERS, NEGATION_SADNESS_BONUS, PHRASE_WEIGHT,
    PHYSICAL_SYMPTOMS, SYMPTOM_WEIGHT,
};

/// Accumulated, unnormalized emotion weights in [`Emotion::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawScores([f64; 4]);

impl RawScores {
    pub fn new(values: [f64; 4]) -> Self {
        Self(values)
    }

    pub fn get(&self, emotion: Emotion) -> f64 {
        self.0[emotion.index()]
    }

    pub fn add(&mut self, emotion: Emotion, amount: f64) {
        self.0[emotion.index()] += amount;
    }

    pub fn set(&mut self, emotion: Emotion, value: f64) {
        self.0[emotion.index()] = value;
    }

    /// Multiply every emotion, zeros included, by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.0 {
            *v *= factor;
        }
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Normalization denominator: the sum, floored at 1.
    pub fn total(&self) -> f64 {
        self.sum().max(1.0)
    }

    pub fn values(&self) -> [f64; 4] {
        self.0
    }
}

/// Integer emotion percentages in [`Emotion::ALL`] order, each in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Percentages([u8; 4]);

impl Percentages {
    pub fn new(values: [u8; 4]) -> Self {
        Self(values.map(|v| v.min(MAX_PERCENTAGE)))
    }

    pub fn get(&self, emotion: Emotion) -> u8 {
        self.0[emotion.index()]
    }

    pub fn set(&mut self, emotion: Emotion, value: u8) {
        self.0[emotion.index()] = value.min(MAX_PERCENTAGE);
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|v| u32::from(*v)).sum()
    }

    pub fn is_flat(&self) -> bool {
        self.0.iter().all(|v| *v == 0)
    }

    /// Residual share: `max(0, 100 - sum)`.
    pub fn neutral(&self) -> u8 {
        u32::from(MAX_PERCENTAGE).saturating_sub(self.sum()) as u8
    }

    /// Argmax, first-wins on ties. `None` when flat.
    pub fn dominant(&self) -> Option<Emotion> {
        Emotion::dominant_of(self.0)
    }

    pub fn values(&self) -> [u8; 4] {
        self.0
    }
}

/// Everything one scoring pass produced, for auditing and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub word_count: usize,
    /// Raw scores after every adjustment, before normalization.
    pub raw: RawScores,
    pub cues_fired: Vec<&'static str>,
    pub negation_applied: bool,
    pub intensifier_count: usize,
    pub percentages: Percentages,
    pub neutral: u8,
    pub overall_score: String,
    /// Fallback rungs that assigned values, in order.
    pub fallback_rules: Vec<&'static str>,
    pub dominant: Option<Emotion>,
}

/// Direct tier: exact token or substring of the full text.
pub fn direct_matches(term: &str, text: &str, tokens: &[&str]) -> bool {
    tokens.contains(&term) || text.contains(term)
}

/// Indirect tier: substring, or any token is a prefix of the term or has it as a prefix.
pub fn indirect_matches(term: &str, text: &str, tokens: &[&str]) -> bool {
    text.contains(term)
        || tokens
            .iter()
            .any(|t| t.starts_with(term) || term.starts_with(t))
}

pub fn phrase_matches(term: &str, text: &str) -> bool {
    text.contains(term)
}

/// Lexicon pass: every matching entry adds its tier weight, once per entry.
pub fn apply_lexicon(text: &str, tokens: &[&str], scores: &mut RawScores) {
    for terms in &LEXICON {
        for term in terms.direct {
            if direct_matches(term, text, tokens) {
                scores.add(terms.emotion, DIRECT_WEIGHT);
            }
        }
        for term in terms.indirect {
            if indirect_matches(term, text, tokens) {
                scores.add(terms.emotion, INDIRECT_WEIGHT);
            }
        }
        for phrase in terms.phrases {
            if phrase_matches(phrase, text) {
                scores.add(terms.emotion, PHRASE_WEIGHT);
            }
        }
    }
}

/// Apply every cue rule that matches. Returns the names of the rules that fired.
pub fn apply_cues(text: &str, rules: &[CueRule], scores: &mut RawScores) -> Vec<&'static str> {
    let mut fired = Vec::new();
    for rule in rules {
        if rule.matches(text) {
            for (emotion, bonus) in rule.bonuses {
                scores.add(*emotion, *bonus);
            }
            fired.push(rule.name);
        }
    }
    fired
}

pub fn apply_symptoms(text: &str, scores: &mut RawScores) {
    for set in &PHYSICAL_SYMPTOMS {
        for symptom in set.symptoms {
            if text.contains(symptom) {
                scores.add(set.emotion, SYMPTOM_WEIGHT);
            }
        }
    }
}

/// Global negation: any marker anywhere moves weight from joy to sadness,
/// but only when joy registered at all.
pub fn apply_negation(text: &str, scores: &mut RawScores) -> bool {
    let negated = NEGATION_MARKERS.iter().any(|m| text.contains(m));
    if !negated || scores.get(Emotion::Joy) <= 0.0 {
        return false;
    }
    let joy = (scores.get(Emotion::Joy) - NEGATION_JOY_PENALTY).max(0.0);
    scores.set(Emotion::Joy, joy);
    scores.add(Emotion::Sadness, NEGATION_SADNESS_BONUS);
    true
}

/// Scale all four scores by `1 + 0.2 * n` for `n` distinct markers present.
pub fn apply_intensifiers(text: &str, scores: &mut RawScores) -> usize {
    let count = INTENSIFIER_MARKERS
        .iter()
        .filter(|m| text.contains(*m))
        .count();
    if count > 0 {
        scores.scale(1.0 + count as f64 * INTENSIFIER_STEP);
    }
    count
}

/// Each emotion's share of the total, rounded and capped at 100 independently.
pub fn normalize(scores: &RawScores) -> Percentages {
    let total = scores.total();
    let mut pct = Percentages::default();
    for emotion in Emotion::ALL {
        let share = (scores.get(emotion) / total * 100.0).round();
        pct.set(emotion, share.clamp(0.0, f64::from(MAX_PERCENTAGE)) as u8);
    }
    pct
}

/// `(joy - sadness - anger) / total`, two decimals. Anxiety does not count.
pub fn overall_score(scores: &RawScores) -> String {
    let balance = (scores.get(Emotion::Joy)
        - scores.get(Emotion::Sadness)
        - scores.get(Emotion::Anger))
        / scores.total();
    format_two_decimals(balance)
}

/// Two-decimal formatting of the exact binary value, with exact ties rounded
/// away from zero.
///
/// The only doubles sitting exactly on a half-cent are odd multiples of 1/8
/// (0.125, 0.375, ...). `{:.2}` would send those to even, so they go through
/// `round()` instead; scaling them by 100 is exact.
pub fn format_two_decimals(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let rounded = (value * 100.0).round() / 100.0;
        return format!("{rounded:.2}");
    }
    format!("{value:.2}")
}

/// Run the fallback ladder over a flat distribution of a long entry.
///
/// Does nothing unless every percentage is zero and the entry has more than
/// `word_threshold` words. Returns the rungs that assigned values.
pub fn apply_fallback(
    text: &str,
    word_count: usize,
    word_threshold: usize,
    rules: &[FallbackRule],
    percentages: &mut Percentages,
) -> Vec<&'static str> {
    let mut applied = Vec::new();
    if !percentages.is_flat() || word_count <= word_threshold {
        return applied;
    }
    for rule in rules {
        let fires = match rule.trigger {
            FallbackTrigger::Pattern(regex) => regex.as_ref().is_some_and(|re| re.is_match(text)),
            FallbackTrigger::StillFlat => percentages.is_flat(),
        };
        if fires {
            for (emotion, value) in rule.assign {
                percentages.set(*emotion, *value);
            }
            applied.push(rule.name);
        }
    }
    applied
}

/// Score a text end to end, without feedback or timestamp.
pub fn analyze(text: &str, config: &SentimentConfig) -> Analysis {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let mut raw = RawScores::default();
    apply_lexicon(&lowered, &tokens, &mut raw);
    let cues_fired = apply_cues(&lowered, &CUE_RULES, &mut raw);
    apply_symptoms(&lowered, &mut raw);
    let negation_applied = apply_negation(&lowered, &mut raw);
    let intensifier_count = apply_intensifiers(&lowered, &mut raw);

    let mut percentages = normalize(&raw);
    let overall_score = overall_score(&raw);
    let fallback_rules = apply_fallback(
        &lowered,
        tokens.len(),
        config.degenerate_word_threshold,
        &FALLBACK_RULES,
        &mut percentages,
    );

    Analysis {
        word_count: tokens.len(),
        raw,
        cues_fired,
        negation_applied,
        intensifier_count,
        neutral: percentages.neutral(),
        dominant: percentages.dominant(),
        percentages,
        overall_score,
        fallback_rules,
    }
}
