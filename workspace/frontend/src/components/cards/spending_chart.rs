use common::DashboardCard;
use model::SpendingPoint;
use plotly::common::{Fill, Line, Marker, Mode};
use plotly::layout::{Axis, Margin, RangeMode};
use plotly::{Layout, Scatter};
use rust_decimal::prelude::ToPrimitive;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::shell::{CardShell, EmptyState};
use crate::hooks::{use_script, LoadState, ScriptSource};
use crate::settings::get_settings;
use crate::widgets::error::ErrorDisplay;
use crate::widgets::loading::Loading;

const LINE_COLOR: &str = "#2563eb";
const FILL_COLOR: &str = "rgba(37,99,235,0.2)";
const CHART_DIV_ID: &str = "chart-spending-trends";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly)]
    fn purge(div_id: &str);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub points: Vec<SpendingPoint>,
}

/// Monthly spending line chart. Plotly itself is only fetched the first time
/// this card is opened.
#[function_component(SpendingChart)]
pub fn spending_chart(props: &Props) -> Html {
    let script = use_script(ScriptSource {
        id: "plotly-js",
        src: get_settings().plotly_script_url,
        global: "Plotly",
    });

    html! {
        <CardShell card={DashboardCard::SpendingTrends}>
            {match script {
                _ if props.points.is_empty() => html! { <EmptyState message="No spending recorded yet." /> },
                LoadState::Ready => html! { <PlotlyLine points={props.points.clone()} /> },
                LoadState::Failed(error) => html! { <ErrorDisplay message={error} /> },
                LoadState::NotStarted | LoadState::Loading => html! {
                    <Loading text={Some("Loading chart...".to_string())} />
                },
            }}
        </CardShell>
    }
}

fn spending_trace(points: &[SpendingPoint]) -> Box<Scatter<String, f64>> {
    let months: Vec<String> = points.iter().map(|p| p.month.clone()).collect();
    let amounts: Vec<f64> = points
        .iter()
        .map(|p| p.amount.to_f64().unwrap_or_default())
        .collect();

    Scatter::new(months, amounts)
        .name("Spending")
        .mode(Mode::LinesMarkers)
        .fill(Fill::ToZeroY)
        .fill_color(FILL_COLOR)
        .line(Line::new().color(LINE_COLOR).width(2.0))
        .marker(
            Marker::new()
                .color(LINE_COLOR)
                .size(8)
                .line(Line::new().color("#ffffff").width(1.5)),
        )
}

fn spending_layout() -> Layout {
    Layout::new()
        .show_legend(false)
        .height(300)
        .margin(Margin::new().top(10).right(10).left(50).bottom(30))
        .paper_background_color("rgba(0,0,0,0)")
        .plot_background_color("rgba(0,0,0,0)")
        .x_axis(Axis::new().show_grid(false))
        .y_axis(Axis::new().range_mode(RangeMode::ToZero).show_grid(true).grid_color("#eee"))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|e| format!("{:?}", e))
}

fn draw(div_id: &str, points: &[SpendingPoint]) -> Result<(), String> {
    let data = js_sys::Array::new();
    data.push(&to_js(&spending_trace(points))?);
    let layout = to_js(&spending_layout())?;
    let config = to_js(&serde_json::json!({"responsive": true, "displayModeBar": false}))?;

    newPlot(div_id, data.into(), layout, config).map_err(|e| format!("{:?}", e))?;
    Ok(())
}

#[derive(Properties, PartialEq)]
struct PlotlyLineProps {
    points: Vec<SpendingPoint>,
}

#[function_component(PlotlyLine)]
fn plotly_line(props: &PlotlyLineProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.points.clone()), move |(container_ref, points)| {
        let mounted = container_ref.cast::<HtmlElement>().is_some();
        if mounted {
            log::trace!("Drawing spending chart with {} points", points.len());
            if let Err(err) = draw(CHART_DIV_ID, points) {
                log::error!("Failed to draw spending chart: {}", err);
            }
        }
        move || {
            if mounted {
                purge(CHART_DIV_ID);
            }
        }
    });

    html! {
        <div ref={container_ref} id={CHART_DIV_ID} class="chart-container" style="height: 300px;"></div>
    }
}
