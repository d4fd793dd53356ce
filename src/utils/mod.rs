/// Validate an IPv4 address (e.g., "192.168.1.1").
/// Returns true if the string is a valid dotted-decimal IPv4 address.
pub fn is_valid_ipv4(ip: &str) -> bool {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return false;
    }
    parts.iter().all(|p| !p.is_empty() && p.parse::<u8>().is_ok())
}

/// Validate a hostname.
/// Allows alphanumeric, hyphens, dots, and underscores. No whitespace, path
/// separators, or Nagios list separators.
pub fn is_valid_hostname(hostname: &str) -> bool {
    if hostname.is_empty() || hostname.len() > 253 {
        return false;
    }
    hostname.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_')
}

/// Validate a skin name: lower-case letters, digits, hyphens and underscores
pub fn is_valid_template_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 64
        && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Validate a value written verbatim into a Nagios directive (e.g. the host
/// definition name): a single token, so it cannot inject extra directives
pub fn is_valid_nagios_token(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 255
        && !value.chars().any(|c| c.is_whitespace() || c.is_control() || c == ';' || c == '{' || c == '}')
}

/// Validate free text written into a Nagios directive or comment line
/// (aliases, location and colocation names). Spaces are fine; control
/// characters would end the line and open a new directive.
pub fn is_valid_nagios_text(value: &str) -> bool {
    !value.chars().any(char::is_control)
}

/// Trim an optional free-text field, mapping blank to None
pub fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_ipv4() {
        assert!(is_valid_ipv4("192.168.1.1"));
        assert!(is_valid_ipv4("0.0.0.0"));
        assert!(is_valid_ipv4("255.255.255.255"));
        assert!(!is_valid_ipv4(""));
        assert!(!is_valid_ipv4("not-an-ip"));
        assert!(!is_valid_ipv4("256.1.1.1"));
        assert!(!is_valid_ipv4("1.2.3"));
        assert!(!is_valid_ipv4("1.2.3.4.5"));
        assert!(!is_valid_ipv4("1.2.3.-1"));
        assert!(!is_valid_ipv4("1..2.3"));
        assert!(!is_valid_ipv4("; rm -rf /"));
    }

    #[test]
    fn test_is_valid_hostname() {
        assert!(is_valid_hostname("swi1-ld5"));
        assert!(is_valid_hostname("swi1.lan1.example.net"));
        assert!(is_valid_hostname("my_switch"));
        assert!(!is_valid_hostname(""));
        assert!(!is_valid_hostname("swi 1")); // spaces
        assert!(!is_valid_hostname("swi1,swi2")); // member separator
        assert!(!is_valid_hostname("../etc/passwd")); // path traversal
        assert!(!is_valid_hostname("host\nname")); // newline
    }

    #[test]
    fn test_is_valid_template_name() {
        assert!(is_valid_template_name("default"));
        assert!(is_valid_template_name("ixp_v2-compact"));
        assert!(!is_valid_template_name(""));
        assert!(!is_valid_template_name("Default"));
        assert!(!is_valid_template_name("../default"));
        assert!(!is_valid_template_name("a.tera"));
    }

    #[test]
    fn test_is_valid_nagios_token() {
        assert!(is_valid_nagios_token("ixp-production-switch"));
        assert!(is_valid_nagios_token("generic_host.v2"));
        assert!(!is_valid_nagios_token(""));
        assert!(!is_valid_nagios_token("a b"));
        assert!(!is_valid_nagios_token("x\n}\ndefine host {"));
        assert!(!is_valid_nagios_token("x;comment"));
    }

    #[test]
    fn test_is_valid_nagios_text() {
        assert!(is_valid_nagios_text("Equinix LD5"));
        assert!(is_valid_nagios_text("C9300 48P; rev {2}"));
        assert!(is_valid_nagios_text(""));
        assert!(!is_valid_nagios_text("Core\n}\ndefine host {"));
        assert!(!is_valid_nagios_text("LAN\r"));
        assert!(!is_valid_nagios_text("tab\there"));
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(trimmed(Some("  LD5 ".into())), Some("LD5".to_string()));
        assert_eq!(trimmed(Some("   ".into())), None);
        assert_eq!(trimmed(None), None);
    }
}
