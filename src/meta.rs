use serde::Deserialize;

use crate::client::Client;
use crate::error::Result;
use crate::util::null_as_default;

/// An index the API can compute, with its level bands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndexType {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub levels: Vec<IndexLevel>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexLevel {
    pub min_value: f64,
    /// `None` for the open-ended top band.
    #[serde(default)]
    pub max_value: Option<f64>,
    /// Human readable range, e.g. `0-25`.
    pub values: String,
    pub level: String,
    pub description: String,
    pub color: String,
}

impl IndexType {
    /// The band containing `value`.
    pub fn level_for(&self, value: f64) -> Option<&IndexLevel> {
        self.levels
            .iter()
            .find(|l| value >= l.min_value && l.max_value.is_none_or(|max| value <= max))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeasurementType {
    pub name: String,
    pub label: String,
    pub unit: String,
}

pub struct MetaService<'a> {
    client: &'a Client,
}

impl<'a> MetaService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// All supported index types with their level definitions.
    pub fn indexes(&self) -> Result<Vec<IndexType>> {
        self.client.get("meta/indexes", None)
    }

    /// All supported measurement types with labels and units.
    pub fn measurements(&self) -> Result<Vec<MeasurementType>> {
        self.client.get("meta/measurements", None)
    }
}
