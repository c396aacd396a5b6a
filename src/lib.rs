pub mod domain;
pub mod sanitizer;
pub mod telemetry;
pub mod utils;
