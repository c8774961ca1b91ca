//! Last-octet IPv4 address ranges.

use std::fmt;
use std::net::Ipv4Addr;

use crate::error::CoreError;
use crate::types::{ProbeTarget, DEFAULT_PORT};

/// Commonly used home and corporate /24 prefixes.
pub const COMMON_PREFIXES: &[&str] = &[
    "192.168.0",
    "192.168.1",
    "192.168.2",
    "192.168.3",
    "192.168.4",
    "192.168.16",
    "10.0.0",
    "10.0.1",
    "10.1.1",
];

/// A /24 prefix with an inclusive last-octet range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    prefix: [u8; 3],
    start: u8,
    end: u8,
}

impl AddressRange {
    /// Full range `.0` through `.255` of `prefix`.
    pub fn new(prefix: [u8; 3]) -> Self {
        Self {
            prefix,
            start: u8::MIN,
            end: u8::MAX,
        }
    }

    /// Parse `a.b.c`, `a.b.c.` or `a.b.c.0/24`.
    ///
    /// The CIDR form must name the network address; host bits are rejected.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidPrefix(input.to_string());
        let trimmed = input.trim();

        let prefix = if let Some(network) = trimmed.strip_suffix("/24") {
            let addr: Ipv4Addr = network.parse().map_err(|_| invalid())?;
            match addr.octets() {
                [a, b, c, 0] => [a, b, c],
                _ => return Err(invalid()),
            }
        } else {
            let body = trimmed.strip_suffix('.').unwrap_or(trimmed);
            let octets = body
                .split('.')
                .map(|part| part.parse::<u8>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| invalid())?;
            <[u8; 3]>::try_from(octets).map_err(|_| invalid())?
        };

        Ok(Self::new(prefix))
    }

    /// Restrict the last octet to `start..=end`.
    pub fn with_bounds(self, start: u8, end: u8) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidRange { start, end });
        }
        Ok(Self { start, end, ..self })
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    pub fn len(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    /// Always false; a range holds at least one address.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Addresses in ascending order.
    pub fn addresses(&self) -> impl Iterator<Item = Ipv4Addr> {
        let [a, b, c] = self.prefix;
        (self.start..=self.end).map(move |d| Ipv4Addr::new(a, b, c, d))
    }

    /// Port-80 targets in ascending order.
    pub fn targets(&self) -> impl Iterator<Item = ProbeTarget> {
        self.targets_on_port(DEFAULT_PORT)
    }

    pub fn targets_on_port(&self, port: u16) -> impl Iterator<Item = ProbeTarget> {
        self.addresses()
            .map(move |addr| ProbeTarget::with_port(addr.to_string(), port))
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.prefix;
        write!(f, "{}.{}.{}.{}-{}", a, b, c, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        let expected = AddressRange::new([192, 168, 4]);
        assert_eq!(AddressRange::parse("192.168.4").unwrap(), expected);
        assert_eq!(AddressRange::parse("192.168.4.").unwrap(), expected);
        assert_eq!(AddressRange::parse("192.168.4.0/24").unwrap(), expected);
        assert_eq!(AddressRange::parse(" 192.168.4 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "192.168", "192.168.4.1", "192.168.256", "a.b.c", "10.0.0.0/16"] {
            assert!(AddressRange::parse(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_parse_cidr_requires_network_address() {
        let range = AddressRange::parse("192.168.4.0/24").unwrap();
        assert_eq!(range, AddressRange::new([192, 168, 4]));

        let err = AddressRange::parse("192.168.4.77/24").unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrefix(ref p) if p == "192.168.4.77/24"));
    }

    #[test]
    fn test_full_range_is_bounded() {
        let range = AddressRange::parse("192.168.4").unwrap();
        let addrs: Vec<_> = range.addresses().collect();
        assert_eq!(range.len(), 256);
        assert_eq!(addrs.len(), 256);
        assert_eq!(addrs[0], Ipv4Addr::new(192, 168, 4, 0));
        assert_eq!(addrs[255], Ipv4Addr::new(192, 168, 4, 255));
    }

    #[test]
    fn test_with_bounds() {
        let range = AddressRange::new([10, 0, 0]).with_bounds(1, 3).unwrap();
        let targets: Vec<String> = range.targets().map(|t| t.url()).collect();
        assert_eq!(
            targets,
            vec!["http://10.0.0.1/", "http://10.0.0.2/", "http://10.0.0.3/"]
        );
        assert_eq!(range.to_string(), "10.0.0.1-3");

        let single = AddressRange::new([10, 0, 0]).with_bounds(7, 7).unwrap();
        assert_eq!(single.len(), 1);

        assert!(matches!(
            AddressRange::new([10, 0, 0]).with_bounds(5, 4),
            Err(CoreError::InvalidRange { start: 5, end: 4 })
        ));
    }

    #[test]
    fn test_targets_on_port() {
        let range = AddressRange::new([127, 0, 0]).with_bounds(1, 1).unwrap();
        let target = range.targets_on_port(8080).next().unwrap();
        assert_eq!(target.url(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_common_prefixes_parse() {
        for prefix in COMMON_PREFIXES {
            assert!(AddressRange::parse(prefix).is_ok(), "{}", prefix);
        }
    }
}
