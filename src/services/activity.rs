/// Body weight assumed when none is configured.
pub const DEFAULT_WEIGHT_KG: f64 = 60.0;

/// MET used for a key missing from the table.
pub const FALLBACK_MET: f64 = 3.0;

/// Energy cost of a single step, in kcal.
pub const KCAL_PER_STEP: f64 = 0.04;

/// Coarse activity bucket inferred from an exercise description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    Walk,
    Jog,
    Run,
    Bike,
    Gym,
}

/// Keyword sets in check order. The first set with a hit wins, so the order
/// here is part of the classification contract.
const KEYWORDS: &[(ActivityCategory, &[&str])] = &[
    (ActivityCategory::Walk, &["歩", "ウォーク", "walk"]),
    (ActivityCategory::Jog, &["ジョギ", "jog"]),
    (ActivityCategory::Run, &["ラン", "run"]),
    (ActivityCategory::Bike, &["自転車", "バイク", "bike"]),
    (ActivityCategory::Gym, &["筋", "ジム"]),
];

/// (key, MET) pairs.
const MET_VALUES: &[(&str, f64)] = &[
    ("walk", 3.3),
    ("jog", 7.0),
    ("run", 9.8),
    ("bike", 6.8),
    ("gym", 5.0),
];

impl ActivityCategory {
    pub fn key(self) -> &'static str {
        match self {
            ActivityCategory::Walk => "walk",
            ActivityCategory::Jog => "jog",
            ActivityCategory::Run => "run",
            ActivityCategory::Bike => "bike",
            ActivityCategory::Gym => "gym",
        }
    }

    pub fn met(self) -> f64 {
        met_for_key(self.key())
    }
}

/// Guess the activity category of a free-text description.
/// Unmatched text is treated as a light walk.
pub fn classify(description: &str) -> ActivityCategory {
    let text = description.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| text.contains(w)))
        .map(|(category, _)| *category)
        .unwrap_or(ActivityCategory::Walk)
}

pub fn met_for_key(key: &str) -> f64 {
    MET_VALUES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, met)| *met)
        .unwrap_or(FALLBACK_MET)
}

/// Rough kcal burned: `MET * weight * hours + steps * 0.04`, truncated.
pub fn estimate(category: ActivityCategory, minutes: u32, steps: u32, weight_kg: f64) -> u32 {
    let hours = f64::from(minutes) / 60.0;
    let kcal = category.met() * weight_kg * hours + f64::from(steps) * KCAL_PER_STEP;
    // `as` truncates toward zero and saturates, so NaN or negatives land on 0.
    kcal as u32
}
