//! `clipfs peertable`: connected peers with their approximate location.

use std::io::IsTerminal;

use crate::cli::args::PeerTableArgs;
use crate::config::Config;
use crate::constants;
use crate::core::fanout::ordered_fan_out;
use crate::core::geo::{Geolocate, IpInfoClient};
use crate::error::Result;
use crate::ipfs::Ipfs;
use crate::state::PeerEntry;
use crate::ui::TextTable;

/// Runs the subcommand.
///
/// # Errors
///
/// Returns an error if the config is invalid, `ipfs swarm peers` fails, or
/// a lookup is needed and the HTTP client cannot be built.
pub fn run(args: &PeerTableArgs) -> Result<()> {
    let config = args.global.load_config()?;

    if args.limit.is_none() && !args.json {
        eprintln!("{}", constants::MSG_PEER_LIMIT_HINT);
    }
    let limit = args.limit.unwrap_or(constants::DEFAULT_PEER_LIMIT);

    let ipfs = Ipfs::from_config(&config);
    let addrs = ipfs.swarm_peers()?;
    let peers = resolve_peers(parse_peers(&addrs, limit), &config)?;
    tracing::info!(listed = peers.len(), connected = addrs.len(), "peers resolved");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&peers)?);
    } else {
        println!(
            "{}",
            render_table(&peers).styled_header(std::io::stdout().is_terminal())
        );
    }
    Ok(())
}

/// Parses the first `limit` multiaddresses, dropping rows without a peer id.
#[must_use]
pub fn parse_peers(addrs: &[String], limit: usize) -> Vec<PeerEntry> {
    addrs
        .iter()
        .take(limit)
        .filter_map(|addr| PeerEntry::parse(addr))
        .collect()
}

/// Geolocates `peers` with the configured service.
///
/// The HTTP client is only built when at least one peer has an IP, so an
/// unusable endpoint does not matter for IP-less listings.
///
/// # Errors
///
/// Returns an error if a lookup is needed and the client cannot be built.
pub fn resolve_peers(peers: Vec<PeerEntry>, config: &Config) -> Result<Vec<PeerEntry>> {
    if peers.iter().all(|peer| peer.ip.is_none()) {
        return Ok(peers);
    }
    let geo = IpInfoClient::new(config)?;
    Ok(locate_peers(&peers, &geo, config.max_concurrency))
}

/// Geolocates each peer, keeping input order.
///
/// Peers without an IP get no lookup. A failed lookup is logged and the peer
/// is dropped.
pub fn locate_peers(peers: &[PeerEntry], geo: &dyn Geolocate, width: usize) -> Vec<PeerEntry> {
    ordered_fan_out(peers, width, |peer| {
        let Some(ip) = peer.ip.as_deref() else {
            return Some(peer.clone());
        };

        match geo.locate(ip) {
            Ok(location) => Some(PeerEntry {
                location: Some(location),
                ..peer.clone()
            }),
            Err(e) => {
                tracing::warn!(peer = %peer.peer_id, ip, "skipping peer: {e}");
                None
            }
        }
    })
    .into_iter()
    .flatten()
    .collect()
}

/// `PeerID | Location` table.
#[must_use]
pub fn render_table(peers: &[PeerEntry]) -> TextTable {
    let mut table = TextTable::new(["PeerID", "Location"]);
    for peer in peers {
        table.push_row([peer.peer_id.clone(), peer.display_location()]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::state::GeoInfo;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::Mutex;

    /// Answers from a fixed table and records every IP it was asked about.
    #[derive(Default)]
    struct FakeGeo {
        calls: Mutex<Vec<String>>,
    }

    impl Geolocate for FakeGeo {
        fn locate(&self, ip: &str) -> Result<GeoInfo> {
            self.calls.lock().unwrap().push(ip.to_string());
            match ip {
                "10.0.0.1" => Ok(GeoInfo {
                    region: Some("Bavaria".to_string()),
                    country: Some("DE".to_string()),
                }),
                "10.0.0.2" => Ok(GeoInfo {
                    region: Some("Ontario".to_string()),
                    country: Some("CA".to_string()),
                }),
                _ => Err(Error::Url(url::ParseError::EmptyHost)),
            }
        }
    }

    fn addrs(lines: &[&str]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    fn collect_peers(
        addrs: &[String],
        limit: usize,
        geo: &dyn Geolocate,
        width: usize,
    ) -> Vec<PeerEntry> {
        locate_peers(&parse_peers(addrs, limit), geo, width)
    }

    /// Serves `requests` HTTP requests: `/10.0.0.1/json` answers with a
    /// location, every other path with a 500.
    fn spawn_geo_server(requests: usize) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            for stream in listener.incoming().take(requests) {
                let mut stream = stream.unwrap();
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                let mut header = String::new();
                while reader.read_line(&mut header).unwrap() > 2 {
                    header.clear();
                }

                let (status, body) = if request_line.starts_with("GET /10.0.0.1/json ") {
                    ("200 OK", r#"{"ip":"10.0.0.1","region":"Bavaria","country":"DE"}"#)
                } else {
                    ("500 Internal Server Error", "{}")
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).unwrap();
            }
        });

        format!("http://{addr}")
    }

    #[test]
    fn test_no_ip_means_unknown_without_lookup() {
        let geo = FakeGeo::default();
        let peers = collect_peers(
            &addrs(&["/dns4/boot.example.org/tcp/4001/p2p/QmBoot"]),
            20,
            &geo,
            4,
        );
        assert_eq!(peers.len(), 1);
        assert_eq!(peers[0].display_location(), "Unknown");
        assert!(geo.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_order_follows_input() {
        let geo = FakeGeo::default();
        let peers = collect_peers(
            &addrs(&[
                "/ip4/10.0.0.2/tcp/4001/p2p/QmSecond",
                "/dns4/x.example/tcp/4001/p2p/QmNoIp",
                "/ip4/10.0.0.1/udp/4001/quic-v1/p2p/QmFirst",
            ]),
            20,
            &geo,
            3,
        );
        let rows: Vec<(String, String)> = peers
            .iter()
            .map(|p| (p.peer_id.clone(), p.display_location()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("QmSecond".to_string(), "Ontario - CA".to_string()),
                ("QmNoIp".to_string(), "Unknown".to_string()),
                ("QmFirst".to_string(), "Bavaria - DE".to_string()),
            ]
        );
    }

    #[test]
    fn test_failed_lookup_skips_peer() {
        let geo = FakeGeo::default();
        let peers = collect_peers(
            &addrs(&[
                "/ip4/10.0.0.1/tcp/4001/p2p/QmOk",
                "/ip4/192.0.2.9/tcp/4001/p2p/QmBroken",
            ]),
            20,
            &geo,
            2,
        );
        assert_eq!(peers.len(), 1);
        assert_eq!(peers[0].peer_id, "QmOk");
    }

    #[test]
    fn test_limit_truncates_before_lookup() {
        let geo = FakeGeo::default();
        let peers = collect_peers(
            &addrs(&[
                "/ip4/10.0.0.1/tcp/4001/p2p/QmA",
                "/ip4/10.0.0.2/tcp/4001/p2p/QmB",
            ]),
            1,
            &geo,
            4,
        );
        assert_eq!(peers.len(), 1);
        assert_eq!(*geo.calls.lock().unwrap(), vec!["10.0.0.1".to_string()]);
    }

    #[test]
    fn test_http_lookup_success_and_server_error() {
        let config = Config {
            geo_endpoint: spawn_geo_server(2),
            ..Config::default()
        };
        let peers = parse_peers(
            &addrs(&[
                "/ip4/10.0.0.1/tcp/4001/p2p/QmOk",
                "/ip4/10.0.0.9/tcp/4001/p2p/QmServerError",
            ]),
            20,
        );

        let peers = resolve_peers(peers, &config).unwrap();
        assert_eq!(peers.len(), 1);
        assert_eq!(peers[0].peer_id, "QmOk");
        assert_eq!(peers[0].display_location(), "Bavaria - DE");
    }

    #[test]
    fn test_no_ip_listing_ignores_unusable_endpoint() {
        let config = Config {
            geo_endpoint: "mailto:geo@example.com".to_string(),
            ..Config::default()
        };
        let peers = parse_peers(&addrs(&["/dns4/boot.example.org/tcp/4001/p2p/QmBoot"]), 20);
        let peers = resolve_peers(peers, &config).unwrap();
        assert_eq!(peers[0].display_location(), "Unknown");

        let peers = parse_peers(&addrs(&["/ip4/10.0.0.1/tcp/4001/p2p/QmA"]), 20);
        assert!(matches!(resolve_peers(peers, &config), Err(Error::Url(_))));
    }

    #[test]
    fn test_render_table_columns() {
        let peers = vec![PeerEntry {
            peer_id: "QmA".to_string(),
            ip: None,
            location: None,
        }];
        let rendered = render_table(&peers).render();
        assert!(rendered.contains("│ PeerID │ Location │"));
        assert!(rendered.contains("│ QmA    │ Unknown  │"));
    }
}
