pub(super) struct DefaultVendor {
    pub name: &'static str,
    pub shortname: &'static str,
}

/// Vendors seeded on first start so switches can be registered without
/// creating them by hand
pub(super) fn default_vendors() -> Vec<DefaultVendor> {
    vec![
        DefaultVendor { name: "Arista Networks", shortname: "Arista" },
        DefaultVendor { name: "Cisco Systems", shortname: "Cisco" },
        DefaultVendor { name: "Extreme Networks", shortname: "Extreme" },
        DefaultVendor { name: "Juniper Networks", shortname: "Juniper" },
        DefaultVendor { name: "Nokia", shortname: "Nokia" },
        DefaultVendor { name: "NVIDIA Mellanox", shortname: "Mellanox" },
    ]
}
