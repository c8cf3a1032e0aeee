// Site catalog - Distinct launch sites, derived once at startup
use crate::domain::charts::SiteOption;
use crate::domain::dataset::LaunchDataset;
use crate::domain::selection::ALL_SITES;

#[derive(Debug, Clone)]
pub struct SiteCatalog {
    sites: Vec<String>,
}

impl SiteCatalog {
    pub fn new(dataset: &LaunchDataset) -> Self {
        Self {
            sites: dataset.distinct_sites(),
        }
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn contains(&self, site: &str) -> bool {
        self.sites.binary_search_by(|s| s.as_str().cmp(site)).is_ok()
    }

    /// Dropdown options: "All Sites" first, then each site in order
    pub fn options(&self) -> Vec<SiteOption> {
        std::iter::once(SiteOption::new("All Sites", ALL_SITES))
            .chain(self.sites.iter().map(|s| SiteOption::new(s.as_str(), s.as_str())))
            .collect()
    }
}
