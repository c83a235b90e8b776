use std::fmt;

use serde::{Deserialize, Serialize};

/// Emotion labels produced by the attribute model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Angry,
    Disgust,
    Fear,
    Happy,
    Sad,
    Surprise,
    Neutral,
}

impl Emotion {
    pub const ALL: &[Emotion] = &[
        Emotion::Angry,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Surprise,
        Emotion::Neutral,
    ];

    /// Coarse valence bucket of the emotion.
    pub fn category(self) -> EmotionCategory {
        match self {
            Emotion::Happy => EmotionCategory::Positive,
            Emotion::Angry | Emotion::Disgust | Emotion::Fear | Emotion::Sad => {
                EmotionCategory::Negative
            }
            Emotion::Surprise | Emotion::Neutral => EmotionCategory::Neutral,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Emotion::Angry => "angry",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionCategory {
    Positive,
    Negative,
    Neutral,
}

/// Perceived race labels produced by the attribute model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    #[serde(rename = "asian")]
    Asian,
    #[serde(rename = "indian")]
    Indian,
    #[serde(rename = "black")]
    Black,
    #[serde(rename = "white")]
    White,
    #[serde(rename = "middle eastern")]
    MiddleEastern,
    #[serde(rename = "latino hispanic")]
    LatinoHispanic,
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Race::Asian => "asian",
            Race::Indian => "indian",
            Race::Black => "black",
            Race::White => "white",
            Race::MiddleEastern => "middle eastern",
            Race::LatinoHispanic => "latino hispanic",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Man,
    Woman,
}
