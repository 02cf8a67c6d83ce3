// ── Daemon display names ──
//
// Maps internal daemon identifiers to the labels shown in the dashboard.
// Unrecognized names pass through unchanged so new daemon types degrade
// gracefully instead of disappearing.

/// Display label for a daemon name (`dhcp4` -> `DHCPv4`, `d2` -> `DDNS`, ...).
pub fn display_name(name: &str) -> String {
    match name {
        "dhcp4" => "DHCPv4".to_owned(),
        "dhcp6" => "DHCPv6".to_owned(),
        "d2" => "DDNS".to_owned(),
        "ca" => "CA".to_owned(),
        "netconf" => "NETCONF".to_owned(),
        other => other.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_daemons_get_friendly_labels() {
        assert_eq!(display_name("dhcp4"), "DHCPv4");
        assert_eq!(display_name("dhcp6"), "DHCPv6");
        assert_eq!(display_name("d2"), "DDNS");
        assert_eq!(display_name("ca"), "CA");
        assert_eq!(display_name("netconf"), "NETCONF");
    }

    #[test]
    fn unknown_daemons_pass_through() {
        assert_eq!(display_name("named"), "named");
        assert_eq!(display_name(""), "");
        assert_eq!(display_name("dhcp7"), "dhcp7");
    }
}
