use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// How a new game is dealt. Loaded from JSON, e.g. `{ "seed": 42 }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DealConfig {
    /// Fixed shuffle seed; `None` shuffles from the thread RNG.
    pub seed: Option<u64>,
}

impl DealConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}
