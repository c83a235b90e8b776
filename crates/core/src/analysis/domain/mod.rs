pub mod analysis_request;
pub mod analysis_result;
pub mod attribute_policy;
pub mod detector_config;
