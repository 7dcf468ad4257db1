use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::client::Client;
use crate::error::Result;
use crate::query::QueryParams;
use crate::util::null_as_default;

/// Measurements for an installation or an arbitrary area.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Measurement {
    pub current: AveragedValues,
    #[serde(default, deserialize_with = "null_as_default")]
    pub history: Vec<AveragedValues>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forecast: Vec<AveragedValues>,
}

/// Readings averaged over `[from_date_time, till_date_time)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AveragedValues {
    pub from_date_time: DateTime<Utc>,
    pub till_date_time: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub indexes: Vec<Index>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub standards: Vec<Standard>,
}

impl AveragedValues {
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.iter().find(|v| v.name == name).map(|v| v.value)
    }

    pub fn index(&self, name: &str) -> Option<&Index> {
        self.indexes.iter().find(|i| i.name == name)
    }
}

/// A named reading, e.g. `PM25` = 12.3 (µg/m³).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Value {
    pub name: String,
    pub value: f64,
}

/// An index such as CAQI computed from the readings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Index {
    pub name: String,
    /// `None` when the installation has no recent data (level `UNKNOWN`).
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub advice: String,
    /// Hex colour, e.g. `#6BC926`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Standard {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pollutant: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub limit: f64,
    /// Reading as a percentage of `limit`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub percent: f64,
    /// Averaging window the limit applies to, e.g. `24h`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub averaging: String,
}

/// Query for [`MeasurementService::by_id`].
#[derive(Debug, Clone, PartialEq)]
pub struct InstallationMeasurementOptions {
    params: QueryParams,
}

impl InstallationMeasurementOptions {
    pub fn new(installation_id: i64) -> Self {
        let mut params = QueryParams::new();
        params.set("installationId", installation_id.to_string());
        Self { params }
    }

    pub fn include_wind(&mut self, include: bool) -> &mut Self {
        self.params.set("includeWind", include.to_string());
        self
    }

    /// Index to compute, e.g. `AIRLY_CAQI`, `CAQI` or `PIJP`.
    pub fn index_type(&mut self, index_type: impl Into<String>) -> &mut Self {
        self.params.set("indexType", index_type);
        self
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }
}

/// Query for [`MeasurementService::nearest`].
#[derive(Debug, Clone, PartialEq)]
pub struct NearestMeasurementOptions {
    params: QueryParams,
}

impl NearestMeasurementOptions {
    pub fn new(lat: f64, lng: f64) -> Self {
        let mut params = QueryParams::new();
        params.set_location(lat, lng);
        Self { params }
    }

    pub fn max_distance_km(&mut self, km: f64) -> &mut Self {
        self.params.set("maxDistanceKM", km.to_string());
        self
    }

    pub fn index_type(&mut self, index_type: impl Into<String>) -> &mut Self {
        self.params.set("indexType", index_type);
        self
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }
}

/// Query for [`MeasurementService::for_point`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointMeasurementOptions {
    params: QueryParams,
}

impl PointMeasurementOptions {
    pub fn new(lat: f64, lng: f64) -> Self {
        let mut params = QueryParams::new();
        params.set_location(lat, lng);
        Self { params }
    }

    pub fn index_type(&mut self, index_type: impl Into<String>) -> &mut Self {
        self.params.set("indexType", index_type);
        self
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }
}

pub struct MeasurementService<'a> {
    client: &'a Client,
}

impl<'a> MeasurementService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Measurements of a single installation.
    pub fn by_id(&self, opts: &InstallationMeasurementOptions) -> Result<Measurement> {
        self.client.get("measurements/installation", Some(&opts.params))
    }

    /// Measurements of the installation closest to a point.
    pub fn nearest(&self, opts: &NearestMeasurementOptions) -> Result<Measurement> {
        self.client.get("measurements/nearest", Some(&opts.params))
    }

    /// Measurements interpolated for any point on the map.
    pub fn for_point(&self, opts: &PointMeasurementOptions) -> Result<Measurement> {
        self.client.get("measurements/point", Some(&opts.params))
    }
}
