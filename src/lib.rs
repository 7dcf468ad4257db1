//! A small blocking Rust client for the [Airly](https://airly.org) air-quality API (v2).
//!
//! Every call is one GET request: the query is built from an options value, the
//! `apikey` header is attached, and the JSON reply is decoded into typed structs.
//! Non-200 replies come back as [`Error::Api`] carrying the API's error code,
//! message and per-parameter violations.
//!
//! ## Quick start
//! - Configure the key via the `AIRLY_API_KEY` environment variable or an
//!   `.airlyrc` file (current directory or home directory), or pass it to
//!   [`Client::new`].
//! - Use the service handles: [`Client::installation`], [`Client::measurement`],
//!   [`Client::meta`].
//!
//! ```no_run
//! use airly::{Client, NearestMeasurementOptions};
//!
//! fn main() -> airly::Result<()> {
//!     let client = Client::from_env()?.with_language("en");
//!
//!     let mut opts = NearestMeasurementOptions::new(50.062006, 19.940984);
//!     opts.max_distance_km(5.0).index_type("AIRLY_CAQI");
//!
//!     let measurement = client.measurement().nearest(&opts)?;
//!     if let Some(caqi) = measurement.current.index("AIRLY_CAQI") {
//!         println!("{}: {}", caqi.level, caqi.description);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Tests and proxies can replace the HTTP stack with their own [`Transport`]
//! via [`Client::with_transport`].

#![forbid(unsafe_code)]

mod client;
mod config;
mod error;
mod installation;
mod measurement;
mod meta;
mod query;
mod transport;
mod util;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, load_config};
pub use error::{ApiError, Error, Result, Violation};
pub use installation::{
    Address, Installation, InstallationService, Location, NearestInstallationOptions, Sponsor,
};
pub use measurement::{
    AveragedValues, Index, InstallationMeasurementOptions, Measurement, MeasurementService,
    NearestMeasurementOptions, PointMeasurementOptions, Standard, Value,
};
pub use meta::{IndexLevel, IndexType, MeasurementType, MetaService};
pub use query::QueryParams;
pub use transport::{HttpResponse, Transport, TransportError};
