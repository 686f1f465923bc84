mod scorer;

pub use scorer::IEmotionScorer;
