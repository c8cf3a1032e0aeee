// Outcome aggregator - Success breakdown for the pie chart
use crate::domain::charts::{PieChart, PieSlice};
use crate::domain::dataset::LaunchDataset;
use crate::domain::launch::Outcome;
use crate::domain::selection::SiteSelector;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct OutcomeAggregator {
    dataset: Arc<LaunchDataset>,
}

impl OutcomeAggregator {
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        Self { dataset }
    }

    /// All sites: successes summed per site, every site present even at zero.
    /// One site: Success and Failure counts, both always present.
    /// A site that is not in the dataset yields no slices.
    pub fn aggregate_outcomes(&self, selector: &SiteSelector) -> Vec<PieSlice> {
        match selector {
            SiteSelector::All => self.successes_by_site(),
            SiteSelector::Site(site) => self.outcomes_for_site(site),
        }
    }

    pub fn pie_chart(&self, selector: &SiteSelector) -> PieChart {
        let title = match selector {
            SiteSelector::All => "Total Successful Launches by Site".to_string(),
            SiteSelector::Site(site) => format!("Success vs Failure for {}", site),
        };
        let chart = PieChart::new(title, self.aggregate_outcomes(selector));
        tracing::debug!(
            "Pie chart for {}: {} slices, {} launches",
            selector,
            chart.slices.len(),
            chart.total()
        );
        chart
    }

    fn successes_by_site(&self) -> Vec<PieSlice> {
        let mut by_site: BTreeMap<&str, u64> = BTreeMap::new();
        for record in self.dataset.records() {
            *by_site.entry(record.site.as_str()).or_default() += u64::from(record.outcome.class());
        }

        by_site
            .into_iter()
            .map(|(site, successes)| PieSlice::new(site, successes))
            .collect()
    }

    fn outcomes_for_site(&self, site: &str) -> Vec<PieSlice> {
        let (successes, failures) = self
            .dataset
            .records()
            .iter()
            .filter(|r| r.site == site)
            .fold((0u64, 0u64), |(s, f), r| {
                if r.is_success() { (s + 1, f) } else { (s, f + 1) }
            });

        if successes + failures == 0 {
            tracing::debug!("No launches recorded for site {}", site);
            return Vec::new();
        }

        vec![
            PieSlice::new(Outcome::Success.label(), successes),
            PieSlice::new(Outcome::Failure.label(), failures),
        ]
    }
}
