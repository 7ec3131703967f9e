//! Fixed seed conversion
//!
//! Compiled-in bootstrap peers are stored as raw 16-byte addresses. Before
//! they are handed to the address manager each one gets a synthetic
//! last-seen time between one and two weeks old, so fixed seeds never look
//! fresher than peers learned from gossip.

use crate::constants::ONE_WEEK;
use rand::Rng;
use serde::Serialize;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

/// Raw compiled-in seed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec {
    /// IPv6 address bytes; IPv4 peers use the `::ffff:a.b.c.d` mapping
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec {
    /// Seed entry for an IPv4 peer
    pub const fn ipv4(a: u8, b: u8, c: u8, d: u8, port: u16) -> Self {
        Self {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }

    /// Socket address for this entry, unwrapping IPv4-mapped addresses
    pub fn socket_addr(&self) -> SocketAddr {
        let v6 = Ipv6Addr::from(self.addr);
        let ip = match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        };
        SocketAddr::new(ip, self.port)
    }
}

impl Serialize for SeedSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.socket_addr())
    }
}

/// Peer record produced from a seed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedAddress {
    pub addr: SocketAddr,
    /// Unix seconds
    pub last_seen: i64,
}

/// Convert seed entries using the given clock and randomness source.
///
/// Every record's `last_seen` lands in `(now - 2 weeks, now - 1 week]`.
pub fn convert_seeds<R: Rng + ?Sized>(specs: &[SeedSpec], now: i64, rng: &mut R) -> Vec<SeedAddress> {
    specs
        .iter()
        .map(|spec| SeedAddress {
            addr: spec.socket_addr(),
            last_seen: now - ONE_WEEK - rng.gen_range(0..ONE_WEEK),
        })
        .collect()
}

/// Convert seed entries against the system clock
pub fn convert_seeds_now(specs: &[SeedSpec]) -> Vec<SeedAddress> {
    convert_seeds(specs, unix_now(), &mut rand::thread_rng())
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_ipv4_mapping() {
        let spec = SeedSpec::ipv4(88, 99, 213, 241, 10809);
        assert_eq!(spec.socket_addr().to_string(), "88.99.213.241:10809");
    }

    #[test]
    fn test_native_ipv6_kept() {
        let mut addr = [0u8; 16];
        addr[0] = 0x20;
        addr[1] = 0x01;
        addr[15] = 0x01;
        let spec = SeedSpec { addr, port: 10808 };
        assert_eq!(spec.socket_addr().to_string(), "[2001::1]:10808");
    }

    #[test]
    fn test_convert_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(convert_seeds(&[], NOW, &mut rng).is_empty());
    }

    #[test]
    fn test_convert_preserves_order_and_count() {
        let specs = [
            SeedSpec::ipv4(88, 99, 213, 241, 10809),
            SeedSpec::ipv4(5, 9, 25, 40, 10809),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        let out = convert_seeds(&specs, NOW, &mut rng);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].addr, specs[0].socket_addr());
        assert_eq!(out[1].addr, specs[1].socket_addr());
        for record in &out {
            assert!(record.last_seen <= NOW - ONE_WEEK);
            assert!(record.last_seen > NOW - 2 * ONE_WEEK);
        }
    }

    #[test]
    fn test_same_rng_seed_same_output() {
        let specs = [SeedSpec::ipv4(5, 9, 25, 40, 10809)];
        let a = convert_seeds(&specs, NOW, &mut StdRng::seed_from_u64(1));
        let b = convert_seeds(&specs, NOW, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_convert_now_is_in_the_past() {
        let specs = [SeedSpec::ipv4(5, 9, 25, 40, 10809)];
        let before = unix_now();
        let out = convert_seeds_now(&specs);
        assert!(out[0].last_seen <= before - ONE_WEEK + 1);
    }
}
