/// Tessera system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Component label used in degradation events from the embedding subsystem.
pub const COMPONENT_EMBEDDINGS: &str = "embeddings";
