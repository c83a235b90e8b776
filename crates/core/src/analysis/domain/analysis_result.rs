use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::detection::domain::face_attributes::{Emotion, EmotionCategory, Gender, Race};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

/// Flat per-image face summary.
///
/// Every per-face sequence holds one entry per reported face, or a single
/// default entry when no face was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub face: YesNo,
    pub multiple_faces: YesNo,
    pub no_faces: usize,
    pub wears_mask: Vec<YesNo>,
    pub age: Vec<Option<f64>>,
    pub gender: Vec<Option<Gender>>,
    pub race: Vec<Option<Race>>,
    pub emotion: Vec<Option<Emotion>>,
    #[serde(rename = "emotion (category)")]
    pub emotion_category: Vec<Option<EmotionCategory>>,
}

impl AnalysisResult {
    /// The result reported when no face is found.
    pub fn no_face() -> Self {
        Self {
            face: YesNo::No,
            multiple_faces: YesNo::No,
            no_faces: 0,
            wears_mask: vec![YesNo::No],
            age: vec![None],
            gender: vec![None],
            race: vec![None],
            emotion: vec![None],
            emotion_category: vec![None],
        }
    }

    /// Flattens the result into record entries.
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("face".into(), json!(self.face));
        record.insert("multiple_faces".into(), json!(self.multiple_faces));
        record.insert("no_faces".into(), json!(self.no_faces));
        record.insert("wears_mask".into(), json!(self.wears_mask));
        record.insert("age".into(), json!(self.age));
        record.insert("gender".into(), json!(self.gender));
        record.insert("race".into(), json!(self.race));
        record.insert("emotion".into(), json!(self.emotion));
        record.insert("emotion (category)".into(), json!(self.emotion_category));
        record
    }

    /// Writes the result keys into a caller's record.
    ///
    /// Existing result keys are overwritten; every other key is left alone.
    pub fn merge_into(&self, record: &mut Map<String, Value>) {
        record.extend(self.to_record());
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::no_face()
    }
}
