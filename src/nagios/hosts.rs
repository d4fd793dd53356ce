use serde::Serialize;

use crate::models::Switch;
use crate::utils::is_valid_nagios_text;

/// What is wrong with an attribute that blocks the export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Missing,
    ControlCharacter,
}

/// Typed error for a switch (or its infrastructure) that cannot be exported:
/// a required attribute is missing or would break the line it is written
/// on. Surfaces as 422 through the API error handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub switch: String,
    pub attribute: &'static str,
    pub problem: Problem,
}

impl ValidationError {
    pub fn new(switch: &str, attribute: &'static str) -> Self {
        Self {
            switch: switch.to_string(),
            attribute,
            problem: Problem::Missing,
        }
    }

    pub fn control_character(switch: &str, attribute: &'static str) -> Self {
        Self {
            problem: Problem::ControlCharacter,
            ..Self::new(switch, attribute)
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.problem, self.switch.is_empty()) {
            (Problem::Missing, true) => {
                write!(f, "switch is missing required attribute: {}", self.attribute)
            }
            (Problem::Missing, false) => {
                write!(f, "switch {} is missing required attribute: {}", self.switch, self.attribute)
            }
            (Problem::ControlCharacter, true) => {
                write!(f, "{} contains control characters", self.attribute)
            }
            (Problem::ControlCharacter, false) => {
                write!(f, "switch {} has control characters in attribute: {}", self.switch, self.attribute)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject text that would end the directive or comment line it lands on
pub fn printable<'a>(switch: &str, attribute: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    if is_valid_nagios_text(value) {
        Ok(value)
    } else {
        Err(ValidationError::control_character(switch, attribute))
    }
}

/// Everything a `define host` block and the groupings need from one
/// active switch, borrowed from the switch record
#[derive(Debug, Clone, Serialize)]
pub struct HostEntry<'a> {
    pub hostname: &'a str,
    pub name: &'a str,
    pub ipv4addr: &'a str,
    pub colocation: &'a str,
    pub location_name: &'a str,
    pub location_shortname: &'a str,
    pub vendor_shortname: &'a str,
    pub model: &'a str,
}

impl<'a> HostEntry<'a> {
    pub fn from_switch(switch: &'a Switch) -> Result<Self, ValidationError> {
        let id = switch.hostname.as_str();
        let missing = |attribute| ValidationError::new(id, attribute);

        let hostname = required(Some(&switch.hostname)).ok_or_else(|| missing("hostname"))?;
        let name = required(switch.name.as_ref()).ok_or_else(|| missing("name"))?;
        let ipv4addr = required(switch.ipv4addr.as_ref()).ok_or_else(|| missing("ipv4addr"))?;
        let vendor = switch.vendor.as_ref().ok_or_else(|| missing("vendor"))?;
        let model = required(switch.model.as_ref()).ok_or_else(|| missing("model"))?;
        let cabinet = switch.cabinet.as_ref().ok_or_else(|| missing("cabinet"))?;
        let location_shortname =
            required(Some(&cabinet.location.shortname)).ok_or_else(|| missing("location shortname"))?;
        let vendor_shortname = required(Some(&vendor.shortname)).ok_or_else(|| missing("vendor shortname"))?;

        Ok(Self {
            hostname: printable(id, "hostname", hostname)?,
            name: printable(id, "name", name)?,
            ipv4addr: printable(id, "ipv4addr", ipv4addr)?,
            colocation: printable(id, "colocation", &cabinet.colocation)?,
            location_name: printable(id, "location name", &cabinet.location.name)?,
            location_shortname: printable(id, "location shortname", location_shortname)?,
            vendor_shortname: printable(id, "vendor shortname", vendor_shortname)?,
            model: printable(id, "model", model)?,
        })
    }
}

/// One line of the host section: a host block or a skip comment
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SwitchEntry<'a> {
    Host(HostEntry<'a>),
    Skipped { hostname: &'a str },
}

impl<'a> SwitchEntry<'a> {
    /// Inactive switches only need a hostname; active ones must be complete
    pub fn from_switch(switch: &'a Switch) -> Result<Self, ValidationError> {
        if switch.active {
            HostEntry::from_switch(switch).map(SwitchEntry::Host)
        } else {
            let hostname = required(Some(&switch.hostname))
                .ok_or_else(|| ValidationError::new("", "hostname"))?;
            Ok(SwitchEntry::Skipped {
                hostname: printable("", "hostname", hostname)?,
            })
        }
    }
}

fn required(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}
