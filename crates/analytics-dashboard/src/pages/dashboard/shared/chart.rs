//! Single-series bar chart

use leptos::*;

use crate::charts::BarSeries;

/// Bar chart drawn with plain elements; bar heights are relative to the tallest bar.
#[component]
pub fn BarChart(id: &'static str, #[prop(into)] series: Signal<BarSeries>) -> impl IntoView {
    view! {
        <div class="chart-container" id=id>
            {move || {
                let series = series.get();
                if series.is_empty() {
                    return view! { <div class="chart-empty">{series.empty_message}</div> }.into_view();
                }
                let heights = series.heights_percent();
                view! {
                    <div class="bar-chart">
                        <div class="axis-title y-axis">{series.y_title.clone()}</div>
                        <div class="bar-plot">
                            {series.bars.iter().zip(heights).map(|(bar, height)| {
                                view! {
                                    <div class="bar-column" title=format!("{}: {}", bar.label, bar.caption)>
                                        <span class="bar-caption">{bar.caption.clone()}</span>
                                        <div
                                            class="bar"
                                            style=format!("height: {:.1}%; background: {}", height, bar.color)
                                        ></div>
                                        <span class="bar-label">{bar.label.clone()}</span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                        <div class="axis-title x-axis">{series.x_title.clone()}</div>
                    </div>
                }.into_view()
            }}
        </div>
    }
}
