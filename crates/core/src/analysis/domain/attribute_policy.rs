use crate::analysis::domain::analysis_result::YesNo;
use crate::analysis::domain::detector_config::{DetectorConfig, MaskPolicy};
use crate::detection::domain::face_attributes::{Emotion, EmotionCategory, Gender, Race};
use crate::detection::domain::face_observation::{Prediction, RawFaceObservation};

/// One face's reportable attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFace {
    pub wears_mask: YesNo,
    pub emotion: Option<Emotion>,
    pub emotion_category: Option<EmotionCategory>,
    pub race: Option<Race>,
    pub gender: Option<Gender>,
    pub age: Option<f64>,
}

/// Applies confidence thresholds and mask suppression to raw predictions.
///
/// A masked face never reports an emotion. Race under a mask follows the
/// configured [`MaskPolicy`]. Gender and age pass through unfiltered.
#[derive(Debug, Clone, Copy)]
pub struct AttributePolicy {
    config: DetectorConfig,
}

impl AttributePolicy {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn resolve(&self, face: &RawFaceObservation) -> ResolvedFace {
        let masked = face.wears_mask();

        let emotion = if masked {
            None
        } else {
            confident_label(face.emotion, self.config.emotion_threshold())
        };

        let race = match (masked, self.config.race_under_mask()) {
            (true, MaskPolicy::Suppress) => None,
            _ => confident_label(face.race, self.config.race_threshold()),
        };

        ResolvedFace {
            wears_mask: YesNo::from(masked),
            emotion,
            emotion_category: emotion.map(Emotion::category),
            race,
            gender: face.gender,
            age: face.age,
        }
    }
}

/// The label if its confidence reaches the threshold (inclusive).
fn confident_label<L>(prediction: Option<Prediction<L>>, threshold: f64) -> Option<L> {
    prediction
        .filter(|p| p.confidence >= threshold)
        .map(|p| p.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::face_observation::MaskSignal;
    use rstest::rstest;

    fn policy(emotion: i32, race: i32) -> AttributePolicy {
        AttributePolicy::new(DetectorConfig::new(emotion, race).unwrap())
    }

    fn confident_face() -> RawFaceObservation {
        RawFaceObservation::default()
            .with_emotion(Emotion::Sad, 99.0)
            .with_race(Race::Indian, 99.0)
            .with_gender(Gender::Man)
            .with_age(44.0)
    }

    #[rstest]
    #[case::at_threshold(50.0, Some(Emotion::Happy))]
    #[case::one_below(49.0, None)]
    #[case::just_below(49.999, None)]
    #[case::above(50.001, Some(Emotion::Happy))]
    fn test_emotion_threshold_boundary(#[case] confidence: f64, #[case] expected: Option<Emotion>) {
        let face = RawFaceObservation::default().with_emotion(Emotion::Happy, confidence);
        assert_eq!(policy(50, 50).resolve(&face).emotion, expected);
    }

    #[rstest]
    #[case::at_threshold(30.0, Some(Race::Black))]
    #[case::one_below(29.0, None)]
    fn test_race_threshold_boundary(#[case] confidence: f64, #[case] expected: Option<Race>) {
        let face = RawFaceObservation::default().with_race(Race::Black, confidence);
        assert_eq!(policy(50, 30).resolve(&face).race, expected);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::mid(50)]
    #[case::max(100)]
    fn test_mask_suppresses_emotion_at_any_threshold(#[case] threshold: i32) {
        let face = RawFaceObservation::default()
            .with_mask(MaskSignal::Flag(true))
            .with_emotion(Emotion::Angry, 100.0);
        let resolved = policy(threshold, 50).resolve(&face);
        assert_eq!(resolved.wears_mask, YesNo::Yes);
        assert_eq!(resolved.emotion, None);
        assert_eq!(resolved.emotion_category, None);
    }

    #[test]
    fn test_mask_suppresses_race_by_default() {
        let face = confident_face().with_mask(MaskSignal::Probability(0.9));
        assert_eq!(policy(50, 50).resolve(&face).race, None);
    }

    #[test]
    fn test_report_policy_keeps_race_under_mask() {
        let config = DetectorConfig::new(50, 50)
            .unwrap()
            .with_race_under_mask(MaskPolicy::Report);
        let face = confident_face().with_mask(MaskSignal::Flag(true));

        let resolved = AttributePolicy::new(config).resolve(&face);

        assert_eq!(resolved.race, Some(Race::Indian));
        assert_eq!(resolved.emotion, None);
    }

    #[test]
    fn test_report_policy_still_applies_race_threshold() {
        let config = DetectorConfig::new(50, 80)
            .unwrap()
            .with_race_under_mask(MaskPolicy::Report);
        let face = RawFaceObservation::default()
            .with_mask(MaskSignal::Flag(true))
            .with_race(Race::White, 79.0);

        assert_eq!(AttributePolicy::new(config).resolve(&face).race, None);
    }

    #[test]
    fn test_unmasked_confident_face_reports_everything() {
        let resolved = policy(50, 50).resolve(&confident_face());
        assert_eq!(
            resolved,
            ResolvedFace {
                wears_mask: YesNo::No,
                emotion: Some(Emotion::Sad),
                emotion_category: Some(EmotionCategory::Negative),
                race: Some(Race::Indian),
                gender: Some(Gender::Man),
                age: Some(44.0),
            }
        );
    }

    #[test]
    fn test_gender_and_age_survive_mask() {
        let face = confident_face().with_mask(MaskSignal::Flag(true));
        let resolved = policy(50, 50).resolve(&face);
        assert_eq!(resolved.gender, Some(Gender::Man));
        assert_eq!(resolved.age, Some(44.0));
    }

    #[test]
    fn test_missing_predictions_are_none() {
        let resolved = policy(0, 0).resolve(&RawFaceObservation::default());
        assert_eq!(resolved.emotion, None);
        assert_eq!(resolved.race, None);
    }

    #[test]
    fn test_nan_confidence_never_passes() {
        let face = RawFaceObservation::default().with_emotion(Emotion::Fear, f64::NAN);
        assert_eq!(policy(0, 0).resolve(&face).emotion, None);
    }
}
