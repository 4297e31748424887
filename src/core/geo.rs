//! IP geolocation lookups.
//!
//! The default service is ipinfo.io, queried as `<endpoint>/<ip>/json`.
//! Only the `region` and `country` fields of the response are used.

use reqwest::blocking::Client;
use url::Url;

use crate::config::Config;
use crate::constants;
use crate::error::{Error, Result};
use crate::state::GeoInfo;

/// Resolves an IP address to a coarse location.
///
/// Implementations must be shareable across the fan-out threads.
pub trait Geolocate: Sync {
    /// Looks up `ip`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup cannot be completed.
    fn locate(&self, ip: &str) -> Result<GeoInfo>;
}

/// HTTP client for ipinfo-compatible services.
pub struct IpInfoClient {
    client: Client,
    endpoint: Url,
}

impl IpInfoClient {
    /// Builds a client from the configured endpoint and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid base URL or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = Url::parse(&config.geo_endpoint)?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }

        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(format!("{}/{}", constants::APP_NAME, constants::APP_VERSION))
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self { client, endpoint })
    }
}

impl Geolocate for IpInfoClient {
    fn locate(&self, ip: &str) -> Result<GeoInfo> {
        let url = lookup_url(&self.endpoint, ip)?;
        tracing::debug!(%url, "geolocation lookup");

        let http_err = |source| Error::Http {
            ip: ip.to_string(),
            source,
        };

        self.client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(http_err)?
            .json::<GeoInfo>()
            .map_err(http_err)
    }
}

/// Appends `<ip>/json` to the endpoint path.
///
/// Segments are pushed rather than joined so IPv6 literals such as
/// `fe80::1` are never mistaken for a URL scheme.
///
/// # Errors
///
/// Returns an error if `endpoint` cannot carry a path.
pub fn lookup_url(endpoint: &Url, ip: &str) -> Result<Url> {
    let mut url = endpoint.clone();
    url.path_segments_mut()
        .map_err(|()| Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .push(ip)
        .push("json");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_url_root_endpoint() {
        let base = Url::parse("https://ipinfo.io").unwrap();
        let url = lookup_url(&base, "147.75.80.1").unwrap();
        assert_eq!(url.as_str(), "https://ipinfo.io/147.75.80.1/json");
    }

    #[test]
    fn test_lookup_url_keeps_endpoint_path() {
        let base = Url::parse("http://127.0.0.1:8080/geo/").unwrap();
        let url = lookup_url(&base, "10.0.0.1").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/geo/10.0.0.1/json");
    }

    #[test]
    fn test_lookup_url_ipv6_literal() {
        let base = Url::parse("https://ipinfo.io").unwrap();
        let url = lookup_url(&base, "fe80::1").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("ipinfo.io"));
        assert!(url.path().ends_with("/json"));
    }

    #[test]
    fn test_client_rejects_non_base_endpoint() {
        let config = Config {
            geo_endpoint: "mailto:geo@example.com".to_string(),
            ..Config::default()
        };
        assert!(matches!(IpInfoClient::new(&config), Err(Error::Url(_))));
    }
}
