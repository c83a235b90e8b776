/// Default minimum emotion confidence (percent) for a label to be reported.
pub const DEFAULT_EMOTION_THRESHOLD: f64 = 50.0;

/// Default minimum race confidence (percent) for a label to be reported.
pub const DEFAULT_RACE_THRESHOLD: f64 = 50.0;

pub const MIN_THRESHOLD: f64 = 0.0;
pub const MAX_THRESHOLD: f64 = 100.0;

/// A mask probability must exceed this to count as a worn mask
/// (the mask and no-mask scores of the classifier sum to one).
pub const MASK_PROBABILITY_CUTOFF: f64 = 0.5;

/// Record key holding the analysed image path.
pub const FILENAME_KEY: &str = "filename";

/// Keys written by an analysis result, in serialization order.
pub const RESULT_KEYS: &[&str] = &[
    "face",
    "multiple_faces",
    "no_faces",
    "wears_mask",
    "age",
    "gender",
    "race",
    "emotion",
    "emotion (category)",
];

/// Default face cap for `LargestFacesDetector`.
pub const DEFAULT_MAX_FACES: usize = 3;
