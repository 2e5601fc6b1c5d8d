use dioxus::prelude::*;

use piste_core::views::{self, MapFilter, Metric};

use crate::components::*;
use crate::state::{ProfilerSelection, Tab};
use crate::theme::ThemedRoot;

/// Root App component for the resort dashboard
///
/// Holds the input state of both tabs and recomputes the derived
/// outputs on each input event:
/// - Resort Map: price/feature filter over the whole table
/// - Country Profiler: per-country metric chart plus the hover-driven
///   resort report card
///
/// Outputs only change when their view operation returns a new value;
/// guard-clause `None` results leave the last output on screen.
#[component]
pub fn App() -> Element {
    let table = use_hook(crate::table);

    // Tab navigation state
    let mut current_tab = use_signal(Tab::default);

    // Resort Map state
    let mut map_filter = use_signal(MapFilter::default);
    let mut map_output = use_signal({
        let table = table.clone();
        move || {
            views::map_view(&table, &MapFilter::default())
                .expect("default filter has a nonzero price limit")
        }
    });

    // Country Profiler state
    let mut selection = use_signal(ProfilerSelection::default);
    let mut bar_output = use_signal({
        let table = table.clone();
        move || {
            let sel = ProfilerSelection::default();
            views::bar_view(&table, &sel.country, sel.metric)
        }
    });
    // Seed the report card so the panel is not empty before the first hover.
    let mut card = use_signal({
        let table = table.clone();
        move || views::report_card(&table, "Hemsedal")
    });

    let on_filter_change = {
        let table = table.clone();
        move |filter: MapFilter| {
            map_filter.set(filter);
            if let Some(output) = views::map_view(&table, &filter) {
                map_output.set(output);
            }
        }
    };

    let on_continent = {
        let table = table.clone();
        move |continent: String| {
            let countries = views::countries_in(&table, &continent);
            let mut sel = selection();
            sel.continent = continent;
            if !countries.contains(&sel.country) {
                sel.country = countries.first().cloned().unwrap_or_default();
            }
            bar_output.set(views::bar_view(&table, &sel.country, sel.metric));
            selection.set(sel);
        }
    };

    let on_country = {
        let table = table.clone();
        move |country: String| {
            let mut sel = selection();
            sel.country = country;
            bar_output.set(views::bar_view(&table, &sel.country, sel.metric));
            selection.set(sel);
        }
    };

    let on_metric = {
        let table = table.clone();
        move |metric: Metric| {
            let mut sel = selection();
            sel.metric = metric;
            bar_output.set(views::bar_view(&table, &sel.country, sel.metric));
            selection.set(sel);
        }
    };

    let on_bar_hover = {
        let table = table.clone();
        move |resort: String| {
            // Stale hover data after a selection change is a no-op.
            if let Some(new_card) = views::report_card(&table, &resort) {
                card.set(Some(new_card));
            }
        }
    };

    let continents = table.continents();
    let countries = views::countries_in(&table, &selection.read().continent);
    let (map_title, map_figure) = map_output();
    let bar = bar_output();

    rsx! {
        ThemedRoot {
            div { class: "dashboard",
                Header {}

                div { class: "tab-bar-container",
                    TabBar {
                        current_tab: current_tab(),
                        on_select: move |tab: Tab| current_tab.set(tab),
                    }
                }

                match current_tab() {
                    Tab::Map => rsx! {
                        h1 { class: "view-title", "{map_title}" }
                        div { class: "main-content",
                            div { class: "sidebar",
                                MapControls {
                                    filter: map_filter(),
                                    on_change: on_filter_change,
                                }
                            }
                            div { class: "content",
                                DensityMap { figure: map_figure.clone() }
                            }
                        }
                    },
                    Tab::Profiler => rsx! {
                        if let Some((title, _)) = &bar {
                            h1 { class: "view-title", "{title}" }
                        }
                        div { class: "main-content",
                            div { class: "sidebar",
                                ProfilerControls {
                                    continents: continents.clone(),
                                    countries: countries.clone(),
                                    selection: selection(),
                                    on_continent,
                                    on_country,
                                    on_metric,
                                }
                            }
                            div { class: "content",
                                if let Some((_, figure)) = &bar {
                                    BarChart {
                                        figure: figure.clone(),
                                        on_hover: on_bar_hover,
                                    }
                                }
                            }
                            div { class: "report-panel",
                                ReportCardPanel { card: card() }
                            }
                        }
                    },
                }
            }
        }
    }
}
