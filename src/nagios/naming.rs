//! Hostgroup names. These are referenced from hand-written Nagios service
//! definitions, so their format must never change.

use regex_lite::Regex;
use std::sync::OnceLock;

fn model_strip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^0-9a-z\-]").expect("static pattern is valid"))
}

/// Lower-case a model name and drop every character outside `[0-9a-z-]`,
/// e.g. "C9300 48P" -> "c930048p"
pub fn model_token(model: &str) -> String {
    model_strip_pattern()
        .replace_all(&model.to_lowercase(), "")
        .into_owned()
}

/// `ixp-switches-infraid-<id>-<key>` for location and vendor groups
pub fn keyed_group(infra_id: i64, key: &str) -> String {
    format!("ixp-switches-infraid-{}-{}", infra_id, key.to_lowercase())
}

/// `ixp-switches-infraid-<id>-<vendor>-<model token>`
pub fn vendor_model_group(infra_id: i64, vendor: &str, model: &str) -> String {
    format!("{}-{}", keyed_group(infra_id, vendor), model_token(model))
}

/// `ixp-production-switches-infraid-<id>` holding every active switch
pub fn production_group(infra_id: i64) -> String {
    format!("ixp-production-switches-infraid-{}", infra_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_token() {
        assert_eq!(model_token("C9300 48P"), "c930048p");
        assert_eq!(model_token("DCS-7280SR-48C6"), "dcs-7280sr-48c6");
        assert_eq!(model_token("QFX5120_48Y (rev.2)"), "qfx512048yrev2");
        assert_eq!(model_token("x670-G2/72x"), "x670-g272x");
        assert_eq!(model_token("Ünïcode"), "ncode");
        assert_eq!(model_token(""), "");
    }

    #[test]
    fn test_keyed_group() {
        assert_eq!(keyed_group(1, "LD5"), "ixp-switches-infraid-1-ld5");
        assert_eq!(keyed_group(12, "Cisco"), "ixp-switches-infraid-12-cisco");
        // Only lower-cased, never sanitised
        assert_eq!(keyed_group(2, "TH North"), "ixp-switches-infraid-2-th north");
    }

    #[test]
    fn test_vendor_model_group() {
        assert_eq!(vendor_model_group(1, "Cisco", "C9300"), "ixp-switches-infraid-1-cisco-c9300");
        assert_eq!(vendor_model_group(3, "Arista", "7280SR 48C6"), "ixp-switches-infraid-3-arista-7280sr48c6");
    }

    #[test]
    fn test_production_group() {
        assert_eq!(production_group(7), "ixp-production-switches-infraid-7");
    }

    #[test]
    fn test_names_are_deterministic() {
        assert_eq!(vendor_model_group(4, "Juniper", "MX204"), vendor_model_group(4, "Juniper", "MX204"));
        assert_ne!(keyed_group(4, "Juniper"), keyed_group(5, "Juniper"));
    }
}
