// ── Shared constraint vocabulary ──
//
// Patterns and enumerations that recur across TR-098, TR-104, TR-181
// and TR-196 declarations.

/// TR-181 `MACAddress` data type (empty allowed).
pub const MAC_ADDRESS: &str = "|([0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2}";

/// TR-181 `IPv4Address` data type (empty allowed).
pub const IPV4_ADDRESS: &str = "|((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\\.){3}(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])";

/// RFC 4122 UUID, as used by WPS.
pub const UUID: &str = "[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}";

/// IEEE organizationally unique identifier, six upper-case hex digits.
pub const OUI: &str = "[0-9A-F]{6}";

/// MCC + MNC, five or six digits.
pub const PLMN_ID: &str = "[0-9]{5,6}";

/// Interface `Status` values shared by every TR-181 interface object.
pub const INTERFACE_STATUS: &[&str] = &[
    "Up",
    "Down",
    "Unknown",
    "Dormant",
    "NotPresent",
    "LowerLayerDown",
    "Error",
];

/// `Status` values of TR-181 objects with an `Enable` switch.
pub const ENABLE_STATUS: &[&str] = &["Disabled", "Enabled", "Error_Misconfigured", "Error"];

/// Enable values of TR-104 profiles and lines.
pub const VOICE_ENABLE: &[&str] = &["Disabled", "Quiescent", "Enabled"];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use regex::Regex;

    fn full(pattern: &str) -> Regex {
        Regex::new(&format!("^(?:{pattern})$")).unwrap()
    }

    #[test]
    fn mac_pattern() {
        let re = full(MAC_ADDRESS);
        assert!(re.is_match("00:1A:2b:3C:4d:5E"));
        assert!(re.is_match(""));
        assert!(!re.is_match("00-1A-2B-3C-4D-5E"));
    }

    #[test]
    fn ipv4_pattern() {
        let re = full(IPV4_ADDRESS);
        assert!(re.is_match("192.168.1.254"));
        assert!(!re.is_match("192.168.1.256"));
    }

    #[test]
    fn uuid_pattern() {
        let re = full(UUID);
        assert!(re.is_match("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!re.is_match("550e8400e29b41d4a716446655440000"));
    }
}
