pub mod batch;
pub mod classification;
pub mod config;
pub mod engine;
pub mod evaluation;
pub mod fallback;
pub mod features;
pub mod metrics;
pub mod model;
pub mod telemetry;
