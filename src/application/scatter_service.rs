// Scatter projector - Payload-filtered launches for the scatter chart
use crate::domain::charts::{ScatterChart, ScatterPoint};
use crate::domain::dataset::LaunchDataset;
use crate::domain::error::DashboardError;
use crate::domain::selection::{PayloadRange, SiteSelector};
use std::sync::Arc;

#[derive(Clone)]
pub struct ScatterProjector {
    dataset: Arc<LaunchDataset>,
}

impl ScatterProjector {
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        Self { dataset }
    }

    /// Full observed payload range of the dataset
    pub fn full_range(&self) -> Result<PayloadRange, DashboardError> {
        PayloadRange::new(self.dataset.min_payload_kg(), self.dataset.max_payload_kg())
    }

    /// Records inside [low, high] for the selected site, in dataset order
    pub fn project_scatter(
        &self,
        selector: &SiteSelector,
        low: f64,
        high: f64,
    ) -> Result<Vec<ScatterPoint>, DashboardError> {
        let range = PayloadRange::new(low, high).inspect_err(|e| tracing::debug!("{}", e))?;
        Ok(self.project(selector, range))
    }

    pub fn project(&self, selector: &SiteSelector, range: PayloadRange) -> Vec<ScatterPoint> {
        let points: Vec<ScatterPoint> = self
            .dataset
            .records()
            .iter()
            .filter(|r| range.contains(r.payload_mass_kg))
            .filter(|r| selector.matches(&r.site))
            .map(|r| ScatterPoint {
                payload_mass_kg: r.payload_mass_kg,
                outcome: r.outcome.class(),
                booster_category: r.booster_category.clone(),
                site: r.site.clone(),
            })
            .collect();

        tracing::debug!(
            "Projected {} points for site {} in {}..={} kg",
            points.len(),
            selector,
            range.low(),
            range.high()
        );

        points
    }

    /// Missing bounds default to the dataset's observed min and max
    pub fn scatter_chart(
        &self,
        selector: &SiteSelector,
        low: Option<f64>,
        high: Option<f64>,
    ) -> Result<ScatterChart, DashboardError> {
        let full = self.full_range()?;
        let points = self.project_scatter(
            selector,
            low.unwrap_or(full.low()),
            high.unwrap_or(full.high()),
        )?;

        let title = match selector {
            SiteSelector::All => "Correlation between Payload and Success".to_string(),
            SiteSelector::Site(site) => format!("Payload vs Success for {}", site),
        };

        Ok(ScatterChart::new(title, points))
    }
}
