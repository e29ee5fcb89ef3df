use serde::Serialize;
use serenity::all::GatewayIntents;

/// Runtime statistics captured at collection time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeStats {
    pub cached_users: usize,
    pub cached_channels: usize,
    /// Average gateway heartbeat round trip; `None` until a heartbeat was acknowledged.
    pub ping_ms: Option<f64>,
    /// Time since the bot became ready.
    pub uptime_ms: Option<u64>,
    pub memory: Option<MemoryUsage>,
    pub runtime: RuntimeInfo,
    pub gateway: GatewayInfo,
}

/// Resident and virtual memory of this process, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryUsage {
    pub rss: u64,
    #[serde(rename = "virtual")]
    pub virtual_memory: u64,
}

/// Identifies the build and platform that produced the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeInfo {
    pub package: String,
    pub version: String,
    pub platform: String,
    pub arch: String,
}

impl RuntimeInfo {
    pub fn current() -> Self {
        Self {
            package: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            platform: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayInfo {
    /// Names of the gateway intents the client connected with.
    pub intents: Option<Vec<String>>,
}

impl GatewayInfo {
    pub fn from_intents(intents: GatewayIntents) -> Self {
        Self {
            intents: Some(
                intents
                    .iter_names()
                    .map(|(name, _)| name.to_string())
                    .collect(),
            ),
        }
    }
}
