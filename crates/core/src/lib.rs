pub mod analysis;
pub mod detection;
pub mod pipeline;
pub mod shared;
