//! Static emotion lexicon: weighted term tiers per emotion, physical symptom
//! cues, and the negation / intensifier marker sets.
//!
//! All matching is done against lowercased text. Lists are kept verbatim,
//! duplicates included: a term listed twice scores twice.

use eterna_core::Emotion;

/// Weight of a `direct` term hit (exact token or substring).
pub const DIRECT_WEIGHT: f64 = 3.0;
/// Weight of an `indirect` term hit (substring or token prefix overlap).
pub const INDIRECT_WEIGHT: f64 = 2.0;
/// Weight of a multi-word `phrase` hit (substring).
pub const PHRASE_WEIGHT: f64 = 4.0;
/// Weight of a physical symptom hit (substring).
pub const SYMPTOM_WEIGHT: f64 = 2.5;

/// Joy lost when any negation marker is present.
pub const NEGATION_JOY_PENALTY: f64 = 3.0;
/// Sadness gained when any negation marker is present.
pub const NEGATION_SADNESS_BONUS: f64 = 2.0;
/// Per-marker growth of the intensifier multiplier.
pub const INTENSIFIER_STEP: f64 = 0.2;

/// The three weighted term tiers for one emotion.
#[derive(Debug, Clone, Copy)]
pub struct EmotionTerms {
    pub emotion: Emotion,
    pub direct: &'static [&'static str],
    pub indirect: &'static [&'static str],
    pub phrases: &'static [&'static str],
}

/// Symptom substrings that add [`SYMPTOM_WEIGHT`] to their owning emotion.
#[derive(Debug, Clone, Copy)]
pub struct SymptomSet {
    pub emotion: Emotion,
    pub symptoms: &'static [&'static str],
}

/// Lexicon tiers in [`Emotion::ALL`] order.
pub static LEXICON: [EmotionTerms; 4] = [
    EmotionTerms {
        emotion: Emotion::Joy,
        direct: JOY_DIRECT,
        indirect: JOY_INDIRECT,
        phrases: JOY_PHRASES,
    },
    EmotionTerms {
        emotion: Emotion::Sadness,
        direct: SADNESS_DIRECT,
        indirect: SADNESS_INDIRECT,
        phrases: SADNESS_PHRASES,
    },
    EmotionTerms {
        emotion: Emotion::Anxiety,
        direct: ANXIETY_DIRECT,
        indirect: ANXIETY_INDIRECT,
        phrases: ANXIETY_PHRASES,
    },
    EmotionTerms {
        emotion: Emotion::Anger,
        direct: ANGER_DIRECT,
        indirect: ANGER_INDIRECT,
        phrases: ANGER_PHRASES,
    },
];

/// Physical symptom cues. Joy has none.
pub static PHYSICAL_SYMPTOMS: [SymptomSet; 3] = [
    SymptomSet {
        emotion: Emotion::Anxiety,
        symptoms: ANXIETY_SYMPTOMS,
    },
    SymptomSet {
        emotion: Emotion::Sadness,
        symptoms: SADNESS_SYMPTOMS,
    },
    SymptomSet {
        emotion: Emotion::Anger,
        symptoms: ANGER_SYMPTOMS,
    },
];

/// Substring-matched anywhere in the text; "no" also hits "know", "not", etc.
pub const NEGATION_MARKERS: &[&str] = &[
    "not", "no", "never", "dont", "don't", "cant", "can't", "wont", "won't", "nothing",
];

/// Substring-matched; each distinct marker present counts once.
pub const INTENSIFIER_MARKERS: &[&str] = &[
    "very", "really", "so", "extremely", "incredibly", "absolutely", "totally", "utterly",
    "deeply",
];

/// Terms for one emotion.
pub fn terms_for(emotion: Emotion) -> &'static EmotionTerms {
    &LEXICON[emotion.index()]
}

// ── joy ─────────────────────────────────────────────────────────────────────
const JOY_DIRECT: &[&str] = &[
    "happy", "joy", "excited", "glad", "great", "wonderful", "love", "awesome", "amazing",
    "good", "better", "best", "fantastic", "excellent", "pleased", "delighted", "cheerful",
    "grateful", "blessed", "optimistic", "hopeful", "confident", "proud", "thrilled",
    "ecstatic", "relieved", "content", "satisfied", "fulfilled", "alive", "motivated",
    "inspired", "uplifted", "vibrant", "enthusiastic", "energized", "winning", "smiling",
    "laughing", "peaceful", "calm", "relaxing", "clear mind", "accomplished", "improving",
    "making progress", "grinning", "fun", "playful",
];
const JOY_INDIRECT: &[&str] = &[
    "smile", "smiling", "laugh", "bright", "light", "sunshine", "breeze", "luck", "eased",
    "lucid", "at ease", "ok", "alright", "in a good place", "at peace", "harmonious",
    "positive", "moving forward", "things are looking up", "on track", "humming", "soothing",
    "cheered", "grin", "grateful for", "content with", "simple joys", "supportive",
    "uplifting",
];
const JOY_PHRASES: &[&str] = &[
    "feel good", "going well", "turned out great", "can't wait", "looking forward",
    "things are working out", "everything is falling into place", "life is awesome",
    "walking on air", "on top of the world", "all is well", "finding my path",
    "where i belong", "going with the flow", "making progress", "things are in my favor",
    "moment of peace", "simple pleasures", "good friends", "finally finished", "rest easy",
    "smile on my face",
];

// ── sadness ─────────────────────────────────────────────────────────────────
const SADNESS_DIRECT: &[&str] = &[
    "sad", "depressed", "miserable", "disappointed", "upset", "hurt", "pain", "lonely",
    "hopeless", "worthless", "down", "blue", "cry", "crying", "tears", "melancholy",
    "let down", "discouraged", "defeated", "lost", "empty", "exhausted", "drained", "numb",
    "heavy", "tired", "fragile", "abandoned", "isolated", "unloved", "heartbroken", "rejected",
    "forgotten", "left out", "excluded", "ashamed", "shameful", "guilty", "embarrassed",
    "embarrassing", "pathetic", "hopeless", "regret", "remorse", "sorry", "ruined",
    "devastated", "missing out", "overshadowed", "weak", "inferior", "inadequate", "failure",
    "ruined day", "wasted", "i deserve", "unsuccessful", "not enough", "let myself down",
];
const SADNESS_INDIRECT: &[&str] = &[
    "empty", "hollow", "numb", "heavy", "low", "dark", "alone", "isolated", "disconnected",
    "loss", "lost", "miss", "missing", "grief", "like a shadow", "rainy", "overcast", "fog",
    "stuck", "nowhere to go", "listless", "weighed down", "emotionless", "no energy",
    "lack of direction", "overwhelmed", "swamped", "buried", "scatterbrained", "worn out",
    "cloudy", "no way out", "irrelevant", "ignored", "left behind", "not noticed",
    "nobody cares", "burned out", "burnt out", "burnout", "pessimist", "ruined", "crushed",
    "let down", "rejected", "can't trust", "looked down", "judged", "don't fit in",
    "not accepted", "unappreciated",
];
const SADNESS_PHRASES: &[&str] = &[
    "feel low", "feeling down", "not good", "dont care", "no point", "give up", "cant do",
    "things are falling apart", "nothing is going right", "nothing works", "im not ok",
    "im not fine", "im drowning", "everything is grey", "i'm left behind", "i'm stuck",
    "i'm lost", "i dont belong", "i feel empty", "i'm going nowhere", "something is missing",
    "don't know what to do anymore", "nobody cares", "no one listens", "no support",
    "wasted effort", "didn't work out", "nothing works out", "regret that choice",
    "so pointless", "never enough", "i shouldn't have", "i wish i could", "nobody helps",
    "my fault", "all alone", "feel invisible", "nobody noticed", "wasn't picked",
    "wasn't chosen", "apologies all the time", "sorry for everything", "waking up tired",
];

// ── anxiety ─────────────────────────────────────────────────────────────────
const ANXIETY_DIRECT: &[&str] = &[
    "worried", "anxious", "nervous", "stressed", "uneasy", "fear", "scared", "concern",
    "panic", "overwhelmed", "tense", "restless", "uncertain", "afraid", "dread", "paranoid",
    "pressure", "apprehensive", "edgy", "alert", "not sure", "can't remember", "grilled",
    "questioned", "out of many", "really hard", "mental block", "blank", "doubt",
    "second guessing", "hesitant", "uneasy", "uncertain", "difficulty sleeping", "insomnia",
    "worrying", "panic attack", "on edge", "unprepared", "dizzy", "shaky",
];
const ANXIETY_INDIRECT: &[&str] = &[
    "sweaty", "sweating", "shaking", "trembling", "racing", "pounding", "tight",
    "cant breathe", "breathe", "dizzy", "nauseous", "sick", "stomach", "chest", "unsure",
    "what if", "bad feeling", "unsettled", "overthinking", "on edge", "up in the air",
    "out of my depth", "heart skips", "fidgety", "worst case", "unpredictable",
    "unknown ahead", "under pressure", "nervous energy", "touch and go", "tick tock",
    "unsettling", "timid", "cannot relax", "self-conscious", "jitters", "nail-biting",
    "doubtful", "inner turmoil", "tension",
];
const ANXIETY_PHRASES: &[&str] = &[
    "cant stop thinking", "keep worrying", "on edge", "out of control", "too much",
    "cant handle", "my mind is racing", "nothing is certain", "things could go wrong",
    "cant seem to relax", "my heart is pounding", "i feel unsafe", "worried sick",
    "my mind wont rest", "i'm spiraling", "waiting for the other shoe to drop",
    "everything is uncertain", "didn't prepare", "didn't study enough", "not ready for test",
    "running late", "behind schedule", "deadline is close", "afraid to ask", "i might fail",
];

// ── anger ───────────────────────────────────────────────────────────────────
const ANGER_DIRECT: &[&str] = &[
    "angry", "furious", "mad", "rage", "irritated", "annoyed", "frustrated", "hostile", "hate",
    "resentful", "outraged", "enraged", "pissed", "fuming", "boiling", "snapped", "exploded",
    "tense", "aggravated", "offended", "bitter", "wrathful", "grilled", "questioned",
    "interrogated", "cops", "police", "authority", "scolded", "lectured", "called out",
    "accused", "forced", "pushed", "dismissed", "ignored", "misunderstood", "unfair",
    "demanded", "told off", "snapped at", "bossed", "targeted", "unjust", "forced to",
    "told to", "asked if", "being told", "out of many", "study properly", "so they said",
    "sarcastic", "mocked", "ridiculed", "sassed", "shamed", "humiliated", "shut down",
    "argued", "fight", "bicker", "glared", "backtalk", "defiant", "rebel", "fed up with",
    "nagged", "lost temper",
];
const ANGER_INDIRECT: &[&str] = &[
    "explode", "snap", "bitter", "resentful", "unfair", "injustice", "betrayed",
    "disrespected", "ignored", "walked all over", "pushed too far", "over the edge",
    "at my limit", "done with it", "can't stand", "my blood boils", "on my nerves",
    "seeing red", "had enough", "fed up", "infuriated", "bossy", "criticized", "scolded",
    "targeted", "humiliated", "overstepped", "burdened", "ganged up", "put on the spot",
    "blamed", "judged", "scapegoat", "insulted", "pushed aside", "wasn't heard",
    "wasn't given a chance", "forced to do", "obligated", "feeling controlled", "resent",
    "unrecognized", "unappreciated", "held back", "cut off in traffic", "rolled my eyes",
    "irony", "self deprecating", "sighing", "talked down to", "bothered", "misjudged",
    "demanding", "bossing", "enforced", "argument",
];
const ANGER_PHRASES: &[&str] = &[
    "fed up", "had enough", "cant take", "make me so", "drives me", "at my wits end",
    "pushed to the edge", "my patience is gone", "one more thing and...",
    "i'm about to lose it", "beyond frustrated", "i want to scream", "flipped out",
    "just blew up", "why does this always happen", "i'm so done", "told to do", "so they said",
    "made me feel stupid", "treated unfairly", "no matter what i do", "not my fault",
    "out of many", "so unfair", "no reason", "didn't listen to me", "i was told",
    "forced to comply", "couldn't give an answer", "talked down to me",
    "who do they think they are", "what a joke", "this is ridiculous", "unbelievable",
    "i can't take this anymore", "not putting up with", "roll with my eyes", "get lost",
    "get over it", "not my problem", "leave me alone", "stop bothering me", "sarcastic remark",
    "biting comment", "unamused", "whatever", "typical", "always the same", "keep nagging",
    "tired of this",
];

// ── physical symptoms ───────────────────────────────────────────────────────
const ANXIETY_SYMPTOMS: &[&str] = &[
    "sweaty", "sweating", "shaking", "trembling", "racing heart", "pounding", "tight chest",
    "cant breathe", "dizzy", "nauseous", "stomach", "butterflies",
];
const SADNESS_SYMPTOMS: &[&str] = &[
    "tired", "exhausted", "heavy", "drained", "no energy", "cant move", "numb",
];
const ANGER_SYMPTOMS: &[&str] = &[
    "hot", "burning", "tense", "clenched", "tight jaw",
];
