//! Swarm peer types and multiaddress scraping.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Captures the address following an `/ip4/` or `/ip6/` segment.
static IP_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(ip4|ip6)/([^/]+)").expect("static pattern compiles"));

/// Coarse location returned by the geolocation service.
///
/// Only `region` and `country` are read; other fields in the response are
/// ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoInfo {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl std::fmt::Display for GeoInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            self.region.as_deref().unwrap_or(constants::UNKNOWN_LOCATION),
            self.country.as_deref().unwrap_or(constants::UNKNOWN_LOCATION)
        )
    }
}

/// One connected swarm peer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PeerEntry {
    /// Trailing `/p2p/<id>` component of the multiaddress.
    pub peer_id: String,
    /// IPv4/IPv6 address embedded in the multiaddress, if any.
    pub ip: Option<String>,
    /// Geolocation, filled in only when an IP was found and looked up.
    pub location: Option<GeoInfo>,
}

impl PeerEntry {
    /// Scrapes a multiaddress line such as
    /// `/ip4/1.2.3.4/udp/4001/quic-v1/p2p/12D3KooW...`.
    ///
    /// Returns `None` when the line has no trailing peer id.
    #[must_use]
    pub fn parse(multiaddr: &str) -> Option<Self> {
        let multiaddr = multiaddr.trim();
        let peer_id = multiaddr.rsplit('/').next().filter(|id| !id.is_empty())?;

        Some(Self {
            peer_id: peer_id.to_string(),
            ip: extract_ip_address(multiaddr),
            location: None,
        })
    }

    /// Location column text.
    #[must_use]
    pub fn display_location(&self) -> String {
        self.location
            .as_ref()
            .map_or_else(|| constants::UNKNOWN_LOCATION.to_string(), ToString::to_string)
    }
}

/// Extracts the IP address from the first `/ip4/` or `/ip6/` segment.
#[must_use]
pub fn extract_ip_address(multiaddr: &str) -> Option<String> {
    IP_SEGMENT
        .captures(multiaddr)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_string())
}
