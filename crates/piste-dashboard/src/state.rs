//! UI state types for the dashboard

use piste_core::views::Metric;

/// Tab selection for the dashboard view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    /// Filterable resort map
    #[default]
    Map,
    /// Per-country metric chart with report card
    Profiler,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Map => "Resort Map",
            Tab::Profiler => "Country Profiler",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Map, Tab::Profiler]
    }
}

/// State of the country profiler's dropdowns
#[derive(Clone, Debug, PartialEq)]
pub struct ProfilerSelection {
    pub continent: String,
    pub country: String,
    pub metric: Metric,
}

impl Default for ProfilerSelection {
    fn default() -> Self {
        Self {
            continent: "Europe".to_string(),
            country: "Norway".to_string(),
            metric: Metric::Price,
        }
    }
}
