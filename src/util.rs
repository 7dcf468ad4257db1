use serde::{Deserialize, Deserializer};
use url::Url;

use crate::error::{Error, Result};
use crate::query::QueryParams;

/// Parses the configured base URL, making sure relative paths join *under* it.
pub(crate) fn parse_base_url(base: &str) -> Result<Url> {
    let base = base.trim();
    let with_slash = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    };
    let url = Url::parse(&with_slash)
        .map_err(|e| Error::Configuration(format!("invalid base url {:?}: {}", base, e)))?;
    if url.cannot_be_a_base() {
        return Err(Error::Configuration(format!(
            "base url {:?} cannot carry endpoint paths",
            base
        )));
    }
    Ok(url)
}

/// Decodes JSON `null` as the type's default (empty list, empty string, zero).
pub(crate) fn null_as_default<'de, D, T>(de: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

pub(crate) fn endpoint_url(base: &Url, path: &str, params: Option<&QueryParams>) -> Result<Url> {
    // A leading slash would drop the `/v2/` prefix of the base.
    let mut url = base
        .join(path.trim_start_matches('/'))
        .map_err(|e| Error::RequestBuild(format!("invalid endpoint path {:?}: {}", path, e)))?;

    if let Some(params) = params.filter(|p| !p.is_empty()) {
        url.query_pairs_mut().extend_pairs(params.iter());
    }
    Ok(url)
}
