//! Canned SDK lister for testing.

use slnprobe_core::{application::ports::SdkLister, error::ProbeResult};

/// Returns a fixed listing without spawning anything.
#[derive(Debug, Clone)]
pub struct FixedSdkLister {
    listing: String,
}

impl FixedSdkLister {
    pub fn new(listing: impl Into<String>) -> Self {
        Self {
            listing: listing.into(),
        }
    }
}

impl SdkLister for FixedSdkLister {
    fn list(&self) -> ProbeResult<String> {
        Ok(self.listing.clone())
    }
}
