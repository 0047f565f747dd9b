use serde::{Deserialize, Serialize};

use self::extraction::ExtractionConfig;
use self::lookup::LookupConfig;

pub mod extraction;
pub mod lookup;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub lookup: LookupConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            extraction: ExtractionConfig::new(),
            lookup: LookupConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
