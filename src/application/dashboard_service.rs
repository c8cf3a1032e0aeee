// Dashboard service - Use cases behind each dashboard interaction
use crate::application::outcome_service::OutcomeAggregator;
use crate::application::scatter_service::ScatterProjector;
use crate::application::site_catalog::SiteCatalog;
use crate::domain::charts::{DashboardControls, PayloadSlider, PieChart, ScatterChart};
use crate::domain::dataset::LaunchDataset;
use crate::domain::error::DashboardError;
use crate::domain::selection::{ALL_SITES, SiteSelector};
use crate::infrastructure::config::DashboardSettings;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    dataset: Arc<LaunchDataset>,
    catalog: SiteCatalog,
    outcomes: OutcomeAggregator,
    scatter: ScatterProjector,
    settings: DashboardSettings,
}

impl DashboardService {
    pub fn new(dataset: Arc<LaunchDataset>, settings: DashboardSettings) -> Self {
        let catalog = SiteCatalog::new(&dataset);
        if dataset.is_empty() {
            tracing::warn!("Launch dataset has no sites; dashboard will be empty");
        } else {
            tracing::info!("Site catalog: {}", catalog.sites().join(", "));
        }

        Self {
            outcomes: OutcomeAggregator::new(dataset.clone()),
            scatter: ScatterProjector::new(dataset.clone()),
            dataset,
            catalog,
            settings,
        }
    }

    pub fn sites(&self) -> &[String] {
        self.catalog.sites()
    }

    pub fn controls(&self) -> DashboardControls {
        DashboardControls {
            title: self.settings.title.clone(),
            site_options: self.catalog.options(),
            default_site: ALL_SITES.to_string(),
            payload_slider: PayloadSlider::new(
                self.dataset.min_payload_kg(),
                self.dataset.max_payload_kg(),
                self.settings.payload_step,
            ),
        }
    }

    pub fn outcome_chart(&self, site: &str) -> PieChart {
        self.outcomes.pie_chart(&self.selector(site))
    }

    pub fn scatter_chart(
        &self,
        site: &str,
        low: Option<f64>,
        high: Option<f64>,
    ) -> Result<ScatterChart, DashboardError> {
        self.scatter.scatter_chart(&self.selector(site), low, high)
    }

    fn selector(&self, site: &str) -> SiteSelector {
        let selector = SiteSelector::parse(site);
        if let SiteSelector::Site(name) = &selector {
            if !self.catalog.contains(name) {
                tracing::warn!("Site {} is not in the catalog; returning empty results", name);
            }
        }
        selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::launch_source::tests::scenario_records;
    use crate::domain::charts::PieSlice;

    fn service() -> DashboardService {
        DashboardService::new(
            Arc::new(LaunchDataset::new(scenario_records())),
            DashboardSettings::default(),
        )
    }

    #[test]
    fn test_controls() {
        let controls = service().controls();
        assert_eq!(controls.title, "SpaceX Launch Records Dashboard");
        assert_eq!(controls.default_site, "ALL");
        let values: Vec<&str> = controls.site_options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["ALL", "A", "B"]);
        assert_eq!(controls.payload_slider.min, 100.0);
        assert_eq!(controls.payload_slider.max, 200.0);
        assert_eq!(controls.payload_slider.step, 1000.0);
    }

    #[test]
    fn test_interactions_route_by_selector() {
        let svc = service();
        assert_eq!(
            svc.outcome_chart("ALL").slices,
            vec![PieSlice::new("A", 1), PieSlice::new("B", 1)]
        );
        assert_eq!(svc.outcome_chart("A").slices.len(), 2);
        assert!(svc.outcome_chart("nowhere").slices.is_empty());

        assert_eq!(svc.scatter_chart("ALL", Some(100.0), Some(200.0)).unwrap().points.len(), 3);
        assert_eq!(svc.scatter_chart("B", Some(0.0), Some(500.0)).unwrap().points.len(), 1);
        assert!(svc.scatter_chart("ALL", Some(2.0), Some(1.0)).is_err());
    }
}
