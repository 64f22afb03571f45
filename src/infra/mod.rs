pub mod assets;
pub mod error;
pub mod export;
pub mod http;
pub mod telemetry;
