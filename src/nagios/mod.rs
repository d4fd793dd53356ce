//! Nagios export: renders host and hostgroup definitions for the switches
//! of one infrastructure.

pub mod groups;
pub mod hosts;
pub mod naming;
pub mod softwrap;

use anyhow::{Context as _, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::Path;
use tera::{Context, Tera};

use crate::models::{Infrastructure, Switch};

use groups::SwitchGroups;
use hosts::SwitchEntry;
use softwrap::SoftWrap;

pub use hosts::ValidationError;

/// Skin used when the request does not name one
pub const DEFAULT_TEMPLATE: &str = "default";

const DEFAULT_TEMPLATE_SOURCE: &str = include_str!("templates/default.tera");

/// Per-request rendering inputs
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Nagios host template every switch inherits from (`use`)
    pub host_definition: String,
    /// Printed in the header
    pub generated_at: NaiveDateTime,
}

#[derive(Serialize)]
struct HostGroup<'a> {
    hostgroup_name: String,
    key: &'a str,
    members: Vec<&'a str>,
}

#[derive(Serialize)]
struct VendorHostGroup<'a> {
    hostgroup_name: String,
    key: &'a str,
    members: Vec<&'a str>,
    models: Vec<HostGroup<'a>>,
}

#[derive(Serialize)]
struct DocumentContext<'a> {
    infra: &'a Infrastructure,
    host_definition: &'a str,
    generated: String,
    switches: Vec<SwitchEntry<'a>>,
    location_groups: Vec<HostGroup<'a>>,
    all_group: HostGroup<'a>,
    vendor_groups: Vec<VendorHostGroup<'a>>,
}

/// Renders the switch document. Holds only compiled templates, so one
/// instance is shared by all requests.
pub struct NagiosRenderer {
    tera: Tera,
}

impl NagiosRenderer {
    /// Renderer with only the built-in skin
    pub fn new(wrap: SoftWrap) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(&template_key(DEFAULT_TEMPLATE), DEFAULT_TEMPLATE_SOURCE)
            .map_err(|e| anyhow::anyhow!("Invalid built-in template: {}", e))?;
        tera.register_filter("softwrap", softwrap::filter(wrap));
        Ok(Self { tera })
    }

    /// Renderer with the built-in skin plus every `<name>.tera` found in
    /// `<templates_dir>/nagios/switches`. A skin named `default` replaces the
    /// built-in one. A missing directory just means no skins.
    pub fn with_skins(wrap: SoftWrap, templates_dir: &Path) -> Result<Self> {
        let mut renderer = Self::new(wrap)?;
        let skins_dir = templates_dir.join("nagios").join("switches");

        if !skins_dir.is_dir() {
            tracing::info!("No Nagios skins directory at {}", skins_dir.display());
            return Ok(renderer);
        }

        let mut skins = Vec::new();
        for entry in std::fs::read_dir(&skins_dir)
            .with_context(|| format!("Failed to read skins directory {}", skins_dir.display()))?
        {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("tera") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !crate::utils::is_valid_template_name(name) {
                tracing::warn!("Ignoring skin with invalid name: {}", path.display());
                continue;
            }
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read skin {}", path.display()))?;
            skins.push((template_key(name), source));
        }

        let count = skins.len();
        renderer.add_templates(skins)?;
        tracing::info!("Loaded {} Nagios skin(s) from {}", count, skins_dir.display());
        Ok(renderer)
    }

    /// Add or replace skins. Added together so skins may extend or include
    /// one another.
    pub fn add_templates(&mut self, skins: Vec<(String, String)>) -> Result<()> {
        self.tera
            .add_raw_templates(skins)
            .map_err(|e| anyhow::anyhow!("Invalid skin template: {}", e))
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template(&template_key(name)).is_ok()
    }

    /// Render the Nagios configuration for `infra`. `switches` must be in the
    /// order the store returned them; it decides the order of the groups.
    pub fn render_switches(
        &self,
        template: &str,
        infra: &Infrastructure,
        switches: &[Switch],
        options: &RenderOptions,
    ) -> Result<String> {
        let key = template_key(template);
        if self.tera.get_template(&key).is_err() {
            return Err(crate::db::NotFoundError::new("Template", template).into());
        }
        hosts::printable("", "infrastructure name", &infra.name)?;

        let entries = switches
            .iter()
            .map(SwitchEntry::from_switch)
            .collect::<Result<Vec<_>, ValidationError>>()?;

        let mut groups = SwitchGroups::default();
        for entry in &entries {
            if let SwitchEntry::Host(host) = entry {
                groups.record(host);
            }
        }
        groups.sort_members();

        tracing::debug!(
            infra_id = infra.id,
            switches = entries.len(),
            active = groups.all.len(),
            locations = groups.locations.len(),
            vendors = groups.vendors.len(),
            "Rendering Nagios switch configuration"
        );

        let context = build_context(infra, entries, groups, options);
        let context = Context::from_serialize(&context)
            .map_err(|e| anyhow::anyhow!("Failed to build template context: {}", e))?;

        self.tera
            .render(&key, &context)
            .map_err(|e| anyhow::anyhow!("Template rendering failed: {}", render_error_chain(&e)))
    }
}

fn build_context<'a>(
    infra: &'a Infrastructure,
    switches: Vec<SwitchEntry<'a>>,
    groups: SwitchGroups<'a>,
    options: &'a RenderOptions,
) -> DocumentContext<'a> {
    let location_groups = groups
        .locations
        .into_iter()
        .map(|(key, members)| HostGroup {
            hostgroup_name: naming::keyed_group(infra.id, key),
            key,
            members,
        })
        .collect();

    let vendor_groups = groups
        .vendors
        .into_iter()
        .map(|(vendor, members)| VendorHostGroup {
            hostgroup_name: naming::keyed_group(infra.id, vendor),
            key: vendor,
            members: members.switches,
            models: members
                .by_model
                .into_iter()
                .map(|(model, members)| HostGroup {
                    hostgroup_name: naming::vendor_model_group(infra.id, vendor, model),
                    key: model,
                    members,
                })
                .collect(),
        })
        .collect();

    DocumentContext {
        infra,
        host_definition: &options.host_definition,
        generated: options.generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        switches,
        location_groups,
        all_group: HostGroup {
            hostgroup_name: naming::production_group(infra.id),
            key: "all",
            members: groups.all,
        },
        vendor_groups,
    }
}

fn template_key(name: &str) -> String {
    format!("nagios/switches/{}", name)
}

/// Tera keeps the useful part of a failure (unknown variable, bad filter
/// argument) in the error's source chain
fn render_error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}
