mod engine;
mod engine_config;
mod engine_snapshot;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::EngineSnapshot;
