use indexmap::IndexMap;

use super::hosts::HostEntry;

/// Members of one vendor, overall and per model
#[derive(Debug, Default)]
pub struct VendorMembers<'a> {
    pub switches: Vec<&'a str>,
    pub by_model: IndexMap<&'a str, Vec<&'a str>>,
}

/// Hostnames of active switches bucketed by location, vendor and
/// (vendor, model). Keys iterate in first-seen order.
#[derive(Debug, Default)]
pub struct SwitchGroups<'a> {
    pub locations: IndexMap<&'a str, Vec<&'a str>>,
    pub vendors: IndexMap<&'a str, VendorMembers<'a>>,
    pub all: Vec<&'a str>,
}

impl<'a> SwitchGroups<'a> {
    pub fn record(&mut self, host: &HostEntry<'a>) {
        self.all.push(host.hostname);

        self.locations
            .entry(host.location_shortname)
            .or_default()
            .push(host.hostname);

        let vendor = self.vendors.entry(host.vendor_shortname).or_default();
        vendor.switches.push(host.hostname);
        vendor.by_model.entry(host.model).or_default().push(host.hostname);
    }

    /// Sort every member list; key order is left as first seen
    pub fn sort_members(&mut self) {
        self.all.sort_unstable();
        for members in self.locations.values_mut() {
            members.sort_unstable();
        }
        for vendor in self.vendors.values_mut() {
            vendor.switches.sort_unstable();
            for members in vendor.by_model.values_mut() {
                members.sort_unstable();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nagios::hosts::tests::switch;

    fn grouped(switches: &[crate::models::Switch]) -> SwitchGroups<'_> {
        let mut groups = SwitchGroups::default();
        for sw in switches {
            groups.record(&HostEntry::from_switch(sw).unwrap());
        }
        groups.sort_members();
        groups
    }

    #[test]
    fn test_keys_in_first_seen_order() {
        let switches = vec![
            switch("c", "Juniper", "MX204", "THN2", true),
            switch("a", "Cisco", "C9300", "LD5", true),
            switch("b", "Juniper", "QFX5120", "LD5", true),
        ];
        let groups = grouped(&switches);

        assert_eq!(groups.locations.keys().copied().collect::<Vec<_>>(), vec!["THN2", "LD5"]);
        assert_eq!(groups.vendors.keys().copied().collect::<Vec<_>>(), vec!["Juniper", "Cisco"]);
        let juniper = &groups.vendors["Juniper"];
        assert_eq!(juniper.by_model.keys().copied().collect::<Vec<_>>(), vec!["MX204", "QFX5120"]);
    }

    #[test]
    fn test_members_sorted() {
        let switches = vec![
            switch("swi3", "Cisco", "C9300", "LD5", true),
            switch("swi1", "Cisco", "C9300", "LD5", true),
            switch("swi2", "Cisco", "C9500", "LD5", true),
        ];
        let groups = grouped(&switches);

        assert_eq!(groups.all, vec!["swi1", "swi2", "swi3"]);
        assert_eq!(groups.locations["LD5"], vec!["swi1", "swi2", "swi3"]);
        assert_eq!(groups.vendors["Cisco"].switches, vec!["swi1", "swi2", "swi3"]);
        assert_eq!(groups.vendors["Cisco"].by_model["C9300"], vec!["swi1", "swi3"]);
        assert_eq!(groups.vendors["Cisco"].by_model["C9500"], vec!["swi2"]);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        // Distinct keys may still collapse to the same group name once lower-cased
        let switches = vec![
            switch("a", "cisco", "C9300", "ld5", true),
            switch("b", "Cisco", "C9300", "LD5", true),
        ];
        let groups = grouped(&switches);
        assert_eq!(groups.locations.len(), 2);
        assert_eq!(groups.vendors.len(), 2);
    }
}
