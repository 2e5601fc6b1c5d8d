//! Reactive view operations
//!
//! Each operation is a pure function from the resort table plus the
//! current input state to a derived output. A `None` return is the
//! "prevent update" signal: the input is incomplete and the caller
//! should keep whatever it is currently displaying.

use serde::{Deserialize, Serialize};

use crate::dataset::{Resort, ResortTable};

/// A plottable numeric column of the dataset
///
/// These are the columns offered by the metric dropdown; identity and
/// location columns are deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Price,
    HighestPoint,
    LowestPoint,
    BeginnerSlopes,
    IntermediateSlopes,
    DifficultSlopes,
    TotalSlopes,
    LongestRun,
    SnowCannons,
    SurfaceLifts,
    ChairLifts,
    GondolaLifts,
    TotalLifts,
    LiftCapacity,
}

impl Metric {
    /// All plottable metrics, in dataset column order
    pub fn all() -> &'static [Metric] {
        &[
            Metric::Price,
            Metric::HighestPoint,
            Metric::LowestPoint,
            Metric::BeginnerSlopes,
            Metric::IntermediateSlopes,
            Metric::DifficultSlopes,
            Metric::TotalSlopes,
            Metric::LongestRun,
            Metric::SnowCannons,
            Metric::SurfaceLifts,
            Metric::ChairLifts,
            Metric::GondolaLifts,
            Metric::TotalLifts,
            Metric::LiftCapacity,
        ]
    }

    /// The dataset column header for this metric
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Price => "Price",
            Metric::HighestPoint => "Highest point",
            Metric::LowestPoint => "Lowest point",
            Metric::BeginnerSlopes => "Beginner slopes",
            Metric::IntermediateSlopes => "Intermediate slopes",
            Metric::DifficultSlopes => "Difficult slopes",
            Metric::TotalSlopes => "Total slopes",
            Metric::LongestRun => "Longest run",
            Metric::SnowCannons => "Snow cannons",
            Metric::SurfaceLifts => "Surface lifts",
            Metric::ChairLifts => "Chair lifts",
            Metric::GondolaLifts => "Gondola lifts",
            Metric::TotalLifts => "Total lifts",
            Metric::LiftCapacity => "Lift capacity",
        }
    }

    /// This metric's value for one resort
    pub fn value(&self, resort: &Resort) -> f64 {
        let v = match self {
            Metric::Price => resort.price,
            Metric::HighestPoint => resort.highest_point,
            Metric::LowestPoint => resort.lowest_point,
            Metric::BeginnerSlopes => resort.beginner_slopes,
            Metric::IntermediateSlopes => resort.intermediate_slopes,
            Metric::DifficultSlopes => resort.difficult_slopes,
            Metric::TotalSlopes => resort.total_slopes,
            Metric::LongestRun => resort.longest_run,
            Metric::SnowCannons => resort.snow_cannons,
            Metric::SurfaceLifts => resort.surface_lifts,
            Metric::ChairLifts => resort.chair_lifts,
            Metric::GondolaLifts => resort.gondola_lifts,
            Metric::TotalLifts => resort.total_lifts,
            Metric::LiftCapacity => resort.lift_capacity,
        };
        v as f64
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::all()
            .iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown metric: {}", s))
    }
}

/// Input state of the map view's controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapFilter {
    /// Maximum ticket price, inclusive
    pub max_price: u32,
    /// Only resorts with summer skiing
    pub summer_skiing: bool,
    /// Only resorts with night skiing
    pub night_skiing: bool,
    /// Only resorts with a snow park
    pub snow_park: bool,
}

impl Default for MapFilter {
    fn default() -> Self {
        Self {
            max_price: 150,
            summer_skiing: false,
            night_skiing: false,
            snow_park: false,
        }
    }
}

/// One resort on the density map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
    /// Density weight (total slopes)
    pub weight: f64,
    /// Hover name
    pub name: String,
}

/// Density-map chart spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapFigure {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
    pub points: Vec<MapPoint>,
}

/// One bar of the country metric chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// X value and hover payload
    pub resort: String,
    pub value: f64,
}

/// Bar-chart spec for one country and metric, sorted descending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarFigure {
    pub metric: Metric,
    pub bars: Vec<Bar>,
}

/// Report card for the hovered resort: its per-country ranks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCard {
    pub resort: String,
    pub elevation_rank: f64,
    pub price_rank: f64,
    pub slope_rank: f64,
    pub cannon_rank: f64,
}

impl ReportCard {
    pub fn elevation_line(&self) -> String {
        format!("Elevation Rank: {}", self.elevation_rank as i64)
    }

    pub fn price_line(&self) -> String {
        format!("Price Rank: {}", self.price_rank as i64)
    }

    pub fn slope_line(&self) -> String {
        format!("Slope Rank: {}", self.slope_rank as i64)
    }

    pub fn cannon_line(&self) -> String {
        format!("Cannon Rank: {}", self.cannon_rank as i64)
    }
}

/// Recompute the map view from the price/feature controls
///
/// Returns the map title and figure, or `None` when the price limit is
/// zero (an empty slider input must not wipe the current map).
pub fn map_view(table: &ResortTable, filter: &MapFilter) -> Option<(String, MapFigure)> {
    if filter.max_price == 0 {
        return None;
    }

    let title = format!(
        "Resorts with a ticket price less than ${}.",
        filter.max_price
    );

    let points = table
        .resorts()
        .iter()
        .filter(|r| r.price <= filter.max_price)
        .filter(|r| !filter.summer_skiing || r.summer_skiing)
        .filter(|r| !filter.night_skiing || r.nightskiing)
        .filter(|r| !filter.snow_park || r.snowparks)
        .map(|r| MapPoint {
            lat: r.latitude,
            lon: r.longitude,
            weight: r.total_slopes as f64,
            name: r.resort.clone(),
        })
        .collect();

    let figure = MapFigure {
        center_lat: 45.0,
        center_lon: -100.0,
        zoom: 2.5,
        points,
    };
    Some((title, figure))
}

/// Countries of a continent for the country dropdown, sorted ascending
pub fn countries_in(table: &ResortTable, continent: &str) -> Vec<String> {
    let mut countries: Vec<String> = table
        .resorts()
        .iter()
        .filter(|r| r.continent == continent)
        .map(|r| r.country.clone())
        .collect();
    countries.sort();
    countries.dedup();
    countries
}

/// Recompute the country bar chart from the dropdown selections
///
/// Returns the chart title and figure, or `None` when no country is
/// selected yet.
pub fn bar_view(table: &ResortTable, country: &str, metric: Metric) -> Option<(String, BarFigure)> {
    if country.is_empty() {
        return None;
    }

    let title = format!("Top Resort Metrics in {} by {}", country, metric);

    let mut bars: Vec<Bar> = table
        .resorts()
        .iter()
        .filter(|r| r.country == country)
        .map(|r| Bar {
            resort: r.resort.clone(),
            value: metric.value(r),
        })
        .collect();
    bars.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));

    Some((title, BarFigure { metric, bars }))
}

/// Build the report card for the hovered resort
///
/// Hover data naming a resort that is not in the table (stale hover
/// after a filter change, for instance) is a no-op.
pub fn report_card(table: &ResortTable, hovered_resort: &str) -> Option<ReportCard> {
    let (resort, ranks) = table.find(hovered_resort)?;
    Some(ReportCard {
        resort: resort.resort.clone(),
        elevation_rank: ranks.elevation,
        price_rank: ranks.price,
        slope_rank: ranks.slope,
        cannon_rank: ranks.cannon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::table;

    #[test]
    fn map_view_zero_price_is_no_update() {
        let filter = MapFilter {
            max_price: 0,
            ..Default::default()
        };
        assert!(map_view(&table(), &filter).is_none());
    }

    #[test]
    fn map_view_filters_by_price() {
        let filter = MapFilter {
            max_price: 50,
            ..Default::default()
        };
        let (title, figure) = map_view(&table(), &filter).unwrap();
        assert_eq!(title, "Resorts with a ticket price less than $50.");
        let names: Vec<&str> = figure.points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Hemsedal", "Trysil", "Geilo"]);
    }

    #[test]
    fn map_view_intersects_feature_flags() {
        // Summer skiing alone: only Zermatt in the fixture.
        let filter = MapFilter {
            max_price: 150,
            summer_skiing: true,
            ..Default::default()
        };
        let (_, figure) = map_view(&table(), &filter).unwrap();
        assert_eq!(figure.points.len(), 1);
        assert_eq!(figure.points[0].name, "Zermatt");

        // Summer and night skiing together match nothing.
        let filter = MapFilter {
            night_skiing: true,
            ..filter
        };
        let (_, figure) = map_view(&table(), &filter).unwrap();
        assert!(figure.points.is_empty());
    }

    #[test]
    fn map_view_spec_constants() {
        let (_, figure) = map_view(&table(), &MapFilter::default()).unwrap();
        assert_eq!(figure.center_lat, 45.0);
        assert_eq!(figure.center_lon, -100.0);
        assert_eq!(figure.zoom, 2.5);
        assert_eq!(figure.points[0].weight, 34.0);
    }

    #[test]
    fn countries_sorted_and_deduped() {
        assert_eq!(
            countries_in(&table(), "Europe"),
            vec!["Norway", "Switzerland"]
        );
        assert_eq!(countries_in(&table(), "North America"), vec!["Canada"]);
    }

    #[test]
    fn countries_of_unknown_continent_is_empty() {
        assert!(countries_in(&table(), "Atlantis").is_empty());
    }

    #[test]
    fn bar_view_empty_country_is_no_update() {
        assert!(bar_view(&table(), "", Metric::Price).is_none());
    }

    #[test]
    fn bar_view_sorts_descending() {
        let (title, figure) = bar_view(&table(), "Norway", Metric::TotalSlopes).unwrap();
        assert_eq!(title, "Top Resort Metrics in Norway by Total slopes");
        let bars: Vec<(&str, f64)> = figure
            .bars
            .iter()
            .map(|b| (b.resort.as_str(), b.value))
            .collect();
        assert_eq!(
            bars,
            vec![("Trysil", 67.0), ("Geilo", 39.0), ("Hemsedal", 34.0)]
        );
    }

    #[test]
    fn report_card_lines() {
        let card = report_card(&table(), "Hemsedal").unwrap();
        assert_eq!(card.resort, "Hemsedal");
        assert_eq!(card.elevation_line(), "Elevation Rank: 1");
        // Price tie with Geilo/Trysil does not involve Hemsedal.
        assert_eq!(card.price_line(), "Price Rank: 1");
        assert_eq!(card.slope_line(), "Slope Rank: 3");
        assert_eq!(card.cannon_line(), "Cannon Rank: 2");
    }

    #[test]
    fn report_card_truncates_tied_ranks() {
        let card = report_card(&table(), "Trysil").unwrap();
        assert_eq!(card.price_rank, 2.5);
        assert_eq!(card.price_line(), "Price Rank: 2");
    }

    #[test]
    fn report_card_unknown_resort_is_no_update() {
        assert!(report_card(&table(), "Atlantis").is_none());
    }

    #[test]
    fn metric_from_str() {
        assert_eq!("Price".parse::<Metric>().unwrap(), Metric::Price);
        assert_eq!(
            "highest point".parse::<Metric>().unwrap(),
            Metric::HighestPoint
        );
        assert!("Elevation".parse::<Metric>().is_err());
    }

    #[test]
    fn metric_display_matches_column_header() {
        assert_eq!(Metric::SnowCannons.to_string(), "Snow cannons");
        assert_eq!(Metric::LiftCapacity.to_string(), "Lift capacity");
    }
}
