// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decision and chart config files.
//!
//! A decision file lists the two option names and one entry per comparison
//! row. Rows with both `a` and `b` positions are placed; rows without either
//! are kept but do not contribute a vector.
//!
//! ```toml
//! option_a = "Stay"
//! option_b = "Move"
//! active = "Salary"
//!
//! [[rows]]
//! category = "Salary"
//! option_a = "$80,000"
//! option_b = "$90,000"
//! a = [0.4, 0.5]
//! b = [0.8, 0.6]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use kurbo::Point;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tradeoff_chart::ChartConfig;
use tradeoff_decision::{Decision, DecisionError};

/// Errors raised while reading input files.
#[derive(Debug, thiserror::Error)]
pub(crate) enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in {}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported file extension for {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("row `{category}` has only one of `a` and `b`")]
    IncompletePlacement { category: String },
    #[error("active row `{0}` does not match any category")]
    UnknownActive(String),
    #[error(transparent)]
    Decision(#[from] DecisionError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, LoadError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn parse<T: DeserializeOwned>(self, text: &str, path: &Path) -> Result<T, LoadError> {
        match self {
            Self::Toml => toml::from_str(text).map_err(|source| LoadError::Toml {
                path: path.to_path_buf(),
                source,
            }),
            Self::Json => serde_json::from_str(text).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// On-disk form of a [`Decision`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct DecisionFile {
    pub(crate) option_a: Option<String>,
    pub(crate) option_b: Option<String>,
    /// Category of the row to mark active.
    pub(crate) active: Option<String>,
    pub(crate) rows: Vec<RowEntry>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RowEntry {
    pub(crate) category: String,
    #[serde(default)]
    pub(crate) option_a: String,
    #[serde(default)]
    pub(crate) option_b: String,
    #[serde(default)]
    pub(crate) a: Option<[f64; 2]>,
    #[serde(default)]
    pub(crate) b: Option<[f64; 2]>,
}

impl DecisionFile {
    /// Builds the decision, rejecting positions outside the unit square.
    pub(crate) fn into_decision(self) -> Result<Decision, LoadError> {
        let mut decision = Decision::new().with_option_names(
            self.option_a
                .unwrap_or_else(|| Decision::DEFAULT_OPTION_A.to_owned()),
            self.option_b
                .unwrap_or_else(|| Decision::DEFAULT_OPTION_B.to_owned()),
        );
        let mut active = None;
        for entry in self.rows {
            let id = decision.next_row_id();
            if active.is_none() && self.active.as_deref() == Some(entry.category.as_str()) {
                active = Some(id);
            }
            decision = decision.add_row(entry.category.as_str(), entry.option_a, entry.option_b);
            match (entry.a, entry.b) {
                (Some([ax, ay]), Some([bx, by])) => {
                    decision =
                        decision.try_place_row(id, Point::new(ax, ay), Point::new(bx, by))?;
                }
                (None, None) => {}
                _ => {
                    return Err(LoadError::IncompletePlacement {
                        category: entry.category,
                    });
                }
            }
        }
        match (self.active, active) {
            (Some(name), None) => Err(LoadError::UnknownActive(name)),
            (_, active) => Ok(decision.activate_row(active)),
        }
    }
}

fn read_structured<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    format.parse(&text, path)
}

/// Reads a decision file; the format follows the extension.
pub(crate) fn load_decision(path: &Path) -> Result<Decision, LoadError> {
    read_structured::<DecisionFile>(path)?.into_decision()
}

/// Reads a chart config; missing fields keep their defaults.
pub(crate) fn load_chart_config(path: &Path) -> Result<ChartConfig, LoadError> {
    read_structured(path)
}
