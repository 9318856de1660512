//! Common constants used throughout spar.

/// Supported configuration file names, looked up in the working directory
pub const CONFIG_FILES: [&str; 3] = ["spar.json", "spar.yml", "spar.yaml"];

/// Opening passthrough marker. Left alone by rendering, rewritten afterwards.
pub const PASSTHROUGH_OPEN: &str = "ERBstart";

/// Closing passthrough marker.
pub const PASSTHROUGH_CLOSE: &str = "ERBend";
