pub mod largest_faces_detector;
pub mod recorded_face_detector;
