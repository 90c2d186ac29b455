use crate::config::settings::ThresholdsConfig;
use crate::models::status::ThresholdSet;

/// Latest thresholds reported by the backend, with the constants used
/// before the first successful status poll.
#[derive(Debug, Clone)]
pub struct ThresholdStore {
    latest: Option<ThresholdSet>,
    fallback_arp: u64,
    fallback_mac: u64,
}

impl ThresholdStore {
    pub fn new(config: &ThresholdsConfig) -> Self {
        Self {
            latest: None,
            fallback_arp: config.fallback_arp,
            fallback_mac: config.fallback_mac,
        }
    }

    pub fn update(&mut self, thresholds: ThresholdSet) {
        self.latest = Some(thresholds);
    }

    pub fn latest(&self) -> Option<&ThresholdSet> {
        self.latest.as_ref()
    }

    /// ARP limit in effect. A zero limit from the backend means "unset".
    pub fn arp_limit(&self) -> u64 {
        match self.latest {
            Some(t) if t.arp > 0 => t.arp,
            _ => self.fallback_arp,
        }
    }

    pub fn mac_limit(&self) -> u64 {
        match self.latest {
            Some(t) if t.mac > 0 => t.mac,
            _ => self.fallback_mac,
        }
    }
}

impl Default for ThresholdStore {
    fn default() -> Self {
        Self::new(&crate::config::defaults::default_thresholds_config())
    }
}
