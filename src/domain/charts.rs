// Chart-ready payloads handed to the rendering layer
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

impl PieSlice {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn new(title: String, slices: Vec<PieSlice>) -> Self {
        Self { title, slices }
    }

    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One projected launch: x = payload, y = outcome, color = booster, hover = site
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    #[serde(rename = "x")]
    pub payload_mass_kg: f64,
    #[serde(rename = "y")]
    pub outcome: u8,
    #[serde(rename = "color")]
    pub booster_category: String,
    #[serde(rename = "hover")]
    pub site: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    pub fn new(title: String, points: Vec<ScatterPoint>) -> Self {
        Self {
            title,
            x_label: "Payload Mass (kg)".to_string(),
            y_label: "Success (1) / Failure (0)".to_string(),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

impl SiteOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub position: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub value: [f64; 2],
}

impl PayloadSlider {
    /// Marks sit at min, midpoint and max, truncated to whole kilograms
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        let mut marks: Vec<SliderMark> = Vec::with_capacity(3);
        for position in [min, (min + max) / 2.0, max] {
            let position = position as i64;
            if marks.iter().all(|m| m.position != position) {
                marks.push(SliderMark {
                    position,
                    label: position.to_string(),
                });
            }
        }

        Self {
            min,
            max,
            step,
            marks,
            value: [min, max],
        }
    }
}

/// Everything a UI needs to build the selection controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardControls {
    pub title: String,
    pub site_options: Vec<SiteOption>,
    pub default_site: String,
    pub payload_slider: PayloadSlider,
}
