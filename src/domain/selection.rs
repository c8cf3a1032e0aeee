// User selections: which site, which payload window
use super::error::DashboardError;
use std::fmt;

/// Sentinel value the UI sends for "all sites"
pub const ALL_SITES: &str = "ALL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    /// `ALL` (case-sensitive) is the sentinel, anything else names a site
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(value.to_string())
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(selected) => selected == site,
        }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelector::All => f.write_str(ALL_SITES),
            SiteSelector::Site(site) => f.write_str(site),
        }
    }
}

/// Inclusive payload mass window in kilograms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, DashboardError> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(DashboardError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}
