use serde::Deserialize;

use crate::client::Client;
use crate::error::Result;
use crate::query::QueryParams;

/// A sensor together with the place it is mounted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installation {
    pub id: i64,
    pub location: Location,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub address: Address,
    /// Metres above sea level, when known.
    #[serde(default)]
    pub elevation: Option<f64>,
    /// `true` for sensors operated by Airly itself.
    pub airly: bool,
    pub sponsor: Sponsor,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub display_address1: Option<String>,
    #[serde(default)]
    pub display_address2: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Query for [`InstallationService::nearest`].
#[derive(Debug, Clone, PartialEq)]
pub struct NearestInstallationOptions {
    params: QueryParams,
}

impl NearestInstallationOptions {
    pub fn new(lat: f64, lng: f64) -> Self {
        let mut params = QueryParams::new();
        params.set_location(lat, lng);
        Self { params }
    }

    /// Search radius in kilometres; the API default is 3 km.
    pub fn max_distance_km(&mut self, km: f64) -> &mut Self {
        self.params.set("maxDistanceKM", km.to_string());
        self
    }

    /// Maximum number of installations returned; `-1` means no limit.
    pub fn max_results(&mut self, n: i64) -> &mut Self {
        self.params.set("maxResults", n.to_string());
        self
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }
}

pub struct InstallationService<'a> {
    client: &'a Client,
}

impl<'a> InstallationService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Metadata of a single installation.
    pub fn by_id(&self, installation_id: i64) -> Result<Installation> {
        self.client
            .get(&format!("installations/{}", installation_id), None)
    }

    /// Installations closest to a point, sorted by distance.
    pub fn nearest(&self, opts: &NearestInstallationOptions) -> Result<Vec<Installation>> {
        self.client.get("installations/nearest", Some(&opts.params))
    }
}
