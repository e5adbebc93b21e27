//! Transit network data model.
//!
//! These types mirror the per-dimension JSON documents served under
//! `data/`: one dataset per dimension, each carrying its stations and
//! (optionally) its lines. Datasets are loaded once and never mutated.

use geo_types::Coord;
use serde::Deserialize;
use std::fmt;

/// World dimension a dataset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Overworld,
    Nether,
    End,
}

impl Dimension {
    /// All dimensions, in dataset load order.
    pub fn all() -> &'static [Dimension] {
        &[Dimension::Overworld, Dimension::Nether, Dimension::End]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Overworld => "Overworld",
            Dimension::Nether => "Nether",
            Dimension::End => "End",
        }
    }

    /// Lowercase key used in document paths and the JSON `dimension` field.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Overworld => "overworld",
            Dimension::Nether => "nether",
            Dimension::End => "end",
        }
    }

    /// Path convention for this dimension's dataset document.
    pub fn data_path(&self) -> String {
        format!("data/{}.json", self.key())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Operating status of a station or line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Operational,
    Planned,
}

impl Status {
    /// Display label shown in popups and the legend.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Operational => "in service",
            Status::Planned => "planned",
        }
    }

    pub fn is_operational(&self) -> bool {
        matches!(self, Status::Operational)
    }
}

/// A named stop at a fixed world coordinate.
#[derive(Debug, Clone, Deserialize)]
pub struct Station {
    pub name: String,
    pub x: f64,
    pub z: f64,
    pub status: Status,
    pub transfer: bool,
    /// Names of the lines serving this station.
    pub lines: Vec<String>,
}

impl Station {
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.x,
            y: self.z,
        }
    }

    /// The hub is the station located exactly at the world origin.
    pub fn is_hub(&self) -> bool {
        self.x == 0.0 && self.z == 0.0
    }
}

/// An ordered sequence of stations forming one service.
#[derive(Debug, Clone, Deserialize)]
pub struct Line {
    pub name: String,
    /// CSS color string, e.g. "#ff0000".
    pub color: String,
    pub status: Status,
    #[serde(rename = "isLoop")]
    pub is_loop: bool,
    /// Station names defining the path, resolved against the same dataset.
    pub stations: Vec<String>,
}

/// One dimension's stations and lines.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub dimension: Dimension,
    /// CSS color string used for operational station markers.
    pub color: String,
    pub stations: Vec<Station>,
    /// Lines are optional per dataset.
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl Dataset {
    /// Look up a station by name within this dataset.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.name == name)
    }
}
