//! Runtime configuration loaded from a JSON parameter file.
//!
//! Every knob mirrors a plain numeric parameter of the algorithms; missing
//! fields fall back to the documented defaults, so a partial file is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cluster::ClusterParams;
use crate::hough::HoughParams;
use crate::triplet::TripletParams;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Top-level parameter set covering both algorithm families.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackFinderConfig {
    pub hough: HoughParams,
    pub triplet: TripletParams,
    pub cluster: ClusterParams,
}

pub fn load_config(path: &Path) -> Result<TrackFinderConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
