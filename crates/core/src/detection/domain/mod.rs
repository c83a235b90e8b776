pub mod face_attribute_detector;
pub mod face_attributes;
pub mod face_observation;
