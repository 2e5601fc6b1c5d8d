//! Pure SVG chart components for the dashboard
//!
//! These components render directly as SVG elements within Dioxus RSX,
//! using CSS variables for theming. They take the chart specs produced
//! by `piste_core::views` rather than raw rows.

use dioxus::prelude::*;
use piste_core::views::{BarFigure, MapFigure};

/// Density-style resort map
///
/// Projects lat/lon onto the viewport with a plain equirectangular
/// mapping over the bounding box of the filtered points. Point size
/// and opacity scale with the density weight (total slopes).
#[component]
pub fn DensityMap(
    /// Map spec to render
    figure: MapFigure,
    /// Chart width in pixels
    #[props(default = 820)]
    width: u32,
    /// Chart height in pixels
    #[props(default = 560)]
    height: u32,
) -> Element {
    if figure.points.is_empty() {
        return rsx! {
            div {
                class: "chart-container chart-empty",
                style: "width: {width}px; height: {height}px;",
                "No resorts match the current filters"
            }
        };
    }

    // Bounding box of the filtered resorts, with a degree of margin so
    // edge points are not clipped.
    let lat_min = figure.points.iter().map(|p| p.lat).fold(f64::INFINITY, f64::min) - 1.0;
    let lat_max = figure.points.iter().map(|p| p.lat).fold(f64::NEG_INFINITY, f64::max) + 1.0;
    let lon_min = figure.points.iter().map(|p| p.lon).fold(f64::INFINITY, f64::min) - 1.0;
    let lon_max = figure.points.iter().map(|p| p.lon).fold(f64::NEG_INFINITY, f64::max) + 1.0;

    let lat_range = (lat_max - lat_min).max(0.1);
    let lon_range = (lon_max - lon_min).max(0.1);

    let padding = 16.0;
    let plot_width = width as f64 - 2.0 * padding;
    let plot_height = height as f64 - 2.0 * padding;

    let scale_x = |lon: f64| padding + ((lon - lon_min) / lon_range) * plot_width;
    let scale_y = |lat: f64| padding + (1.0 - (lat - lat_min) / lat_range) * plot_height;

    let max_weight = figure
        .points
        .iter()
        .map(|p| p.weight)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);

    rsx! {
        div {
            class: "chart-container",
            style: "width: {width}px; height: {height}px;",

            svg {
                width: "{width}",
                height: "{height}",
                view_box: "0 0 {width} {height}",

                for point in figure.points.iter() {
                    {
                        let x = scale_x(point.lon);
                        let y = scale_y(point.lat);
                        // Area proportional to weight reads as density.
                        let r = 4.0 + 12.0 * (point.weight / max_weight).sqrt();
                        let opacity = 0.25 + 0.55 * (point.weight / max_weight);
                        rsx! {
                            circle {
                                cx: "{x:.1}",
                                cy: "{y:.1}",
                                r: "{r:.1}",
                                fill: "var(--accent-primary)",
                                fill_opacity: "{opacity:.2}",
                                stroke: "var(--accent-primary)",
                                stroke_width: "1",
                                title { "{point.name}: {point.weight:.0} slopes" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Bar chart of one metric across a country's resorts
///
/// The x axis carries no tick labels (a country can have dozens of
/// resorts); the hover payload identifies the bar instead, and feeds
/// the report card.
#[component]
pub fn BarChart(
    /// Bar spec to render, sorted descending
    figure: BarFigure,
    /// Chart width in pixels
    #[props(default = 620)]
    width: u32,
    /// Chart height in pixels
    #[props(default = 420)]
    height: u32,
    /// Called with the resort name when a bar is hovered
    on_hover: EventHandler<String>,
) -> Element {
    if figure.bars.is_empty() {
        return rsx! {
            div {
                class: "chart-container chart-empty",
                style: "width: {width}px; height: {height}px;",
                "No data"
            }
        };
    }

    let y_max = figure
        .bars
        .iter()
        .map(|b| b.value)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(0.001)
        * 1.1;

    // Padding for labels
    let padding_left = 55.0;
    let padding_right = 10.0;
    let padding_top = 20.0;
    let padding_bottom = 15.0;

    let plot_width = width as f64 - padding_left - padding_right;
    let plot_height = height as f64 - padding_top - padding_bottom;

    let n = figure.bars.len();
    let slot = plot_width / n as f64;
    let bar_width = (slot * 0.8).max(1.0);

    let scale_y = |v: f64| padding_top + (1.0 - v / y_max) * plot_height;

    // Grid lines
    let grid_lines_y = 4;
    let y_grid_step = y_max / grid_lines_y as f64;

    rsx! {
        div {
            class: "chart-container",
            style: "width: {width}px; height: {height}px;",

            svg {
                width: "{width}",
                height: "{height}",
                view_box: "0 0 {width} {height}",

                // Grid lines
                for i in 0..=grid_lines_y {
                    {
                        let y_val = (i as f64) * y_grid_step;
                        let y_pos = scale_y(y_val);
                        rsx! {
                            line {
                                x1: "{padding_left}",
                                y1: "{y_pos:.1}",
                                x2: "{width as f64 - padding_right}",
                                y2: "{y_pos:.1}",
                                stroke: "var(--border-color)",
                                stroke_dasharray: "2,2",
                                stroke_width: "1",
                            }
                            text {
                                x: "{padding_left - 5.0}",
                                y: "{y_pos:.1}",
                                text_anchor: "end",
                                dominant_baseline: "middle",
                                font_size: "10",
                                fill: "var(--text-muted)",
                                "{y_val:.0}"
                            }
                        }
                    }
                }

                // Bars
                for (i, bar) in figure.bars.iter().enumerate() {
                    {
                        let x = padding_left + i as f64 * slot + (slot - bar_width) / 2.0;
                        let top = scale_y(bar.value);
                        let bar_height = (plot_height + padding_top - top).max(0.0);
                        let name = bar.resort.clone();
                        rsx! {
                            rect {
                                x: "{x:.1}",
                                y: "{top:.1}",
                                width: "{bar_width:.1}",
                                height: "{bar_height:.1}",
                                fill: "var(--accent-primary)",
                                rx: "1",
                                onmouseenter: move |_| on_hover.call(name.clone()),
                                title { "{bar.resort}: {bar.value:.0}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
