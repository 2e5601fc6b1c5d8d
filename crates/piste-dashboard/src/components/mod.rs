use dioxus::prelude::*;

use piste_core::views::{MapFilter, Metric, ReportCard};

use crate::state::{ProfilerSelection, Tab};
use crate::theme::ThemeSwitcher;

pub mod charts;

pub use charts::{BarChart, DensityMap};

/// Header component with dashboard title and theme switcher
#[component]
pub fn Header() -> Element {
    rsx! {
        div {
            class: "header",
            h1 { "Piste Resort Explorer" }
            ThemeSwitcher {}
        }
    }
}

/// Tab bar for switching between the map and the country profiler
#[component]
pub fn TabBar(current_tab: Tab, on_select: EventHandler<Tab>) -> Element {
    rsx! {
        div { class: "tab-bar",
            for tab in Tab::all() {
                button {
                    class: if *tab == current_tab { "tab-btn active" } else { "tab-btn" },
                    onclick: {
                        let tab = *tab;
                        move |_| on_select.call(tab)
                    },
                    "{tab.label()}"
                }
            }
        }
    }
}

/// Price slider and feature-preference checklists for the map view
#[component]
pub fn MapControls(filter: MapFilter, on_change: EventHandler<MapFilter>) -> Element {
    rsx! {
        div { class: "card controls-card",
            h3 { "Price Limit" }
            div { class: "slider-row",
                input {
                    r#type: "range",
                    class: "price-slider",
                    min: "0",
                    max: "150",
                    step: "25",
                    value: "{filter.max_price}",
                    onchange: move |e| {
                        if let Ok(price) = e.value().parse::<u32>() {
                            on_change.call(MapFilter { max_price: price, ..filter });
                        }
                    },
                }
                span { class: "slider-value", "${filter.max_price}" }
            }

            h3 { "Feature Preferences" }
            label { class: "checklist-item",
                input {
                    r#type: "checkbox",
                    checked: filter.summer_skiing,
                    onchange: move |e| {
                        on_change.call(MapFilter { summer_skiing: e.checked(), ..filter });
                    },
                }
                "Has Summer Skiing"
            }
            label { class: "checklist-item",
                input {
                    r#type: "checkbox",
                    checked: filter.night_skiing,
                    onchange: move |e| {
                        on_change.call(MapFilter { night_skiing: e.checked(), ..filter });
                    },
                }
                "Has Night Skiing"
            }
            label { class: "checklist-item",
                input {
                    r#type: "checkbox",
                    checked: filter.snow_park,
                    onchange: move |e| {
                        on_change.call(MapFilter { snow_park: e.checked(), ..filter });
                    },
                }
                "Has Snow Park"
            }
        }
    }
}

/// Continent, country and metric dropdowns for the country profiler
#[component]
pub fn ProfilerControls(
    continents: Vec<String>,
    countries: Vec<String>,
    selection: ProfilerSelection,
    on_continent: EventHandler<String>,
    on_country: EventHandler<String>,
    on_metric: EventHandler<Metric>,
) -> Element {
    rsx! {
        div { class: "card controls-card",
            label { class: "dropdown-label", "Select A Continent:" }
            select {
                class: "dropdown",
                value: "{selection.continent}",
                onchange: move |e| on_continent.call(e.value()),
                for continent in continents.iter() {
                    option {
                        value: "{continent}",
                        selected: *continent == selection.continent,
                        "{continent}"
                    }
                }
            }

            label { class: "dropdown-label", "Select A Country:" }
            select {
                class: "dropdown",
                value: "{selection.country}",
                onchange: move |e| on_country.call(e.value()),
                for country in countries.iter() {
                    option {
                        value: "{country}",
                        selected: *country == selection.country,
                        "{country}"
                    }
                }
            }

            label { class: "dropdown-label", "Select A Metric to Plot:" }
            select {
                class: "dropdown",
                value: "{selection.metric.as_str()}",
                onchange: move |e| {
                    if let Ok(metric) = e.value().parse::<Metric>() {
                        on_metric.call(metric);
                    }
                },
                for metric in Metric::all() {
                    option {
                        value: "{metric.as_str()}",
                        selected: *metric == selection.metric,
                        "{metric.as_str()}"
                    }
                }
            }
        }
    }
}

/// Report card panel: hovered resort name plus its four country ranks
#[component]
pub fn ReportCardPanel(card: Option<ReportCard>) -> Element {
    rsx! {
        div { class: "report-card",
            h3 { "Resort Report Card" }
            if let Some(card) = card {
                div { class: "card resort-name-card", "{card.resort}" }
                div { class: "kpi-grid",
                    div { class: "card kpi-card", "{card.elevation_line()}" }
                    div { class: "card kpi-card", "{card.slope_line()}" }
                    div { class: "card kpi-card", "{card.price_line()}" }
                    div { class: "card kpi-card", "{card.cannon_line()}" }
                }
            } else {
                p { class: "report-card-hint",
                    "Hover a bar to see the resort's country ranks."
                }
            }
        }
    }
}
