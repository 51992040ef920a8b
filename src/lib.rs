pub mod logger;
pub mod measurement_pipeline;
