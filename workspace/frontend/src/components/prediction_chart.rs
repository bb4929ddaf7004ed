use common::{ChartRenderer, ForecastChart};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(div_id: &str) -> Result<JsValue, JsValue>;
}

/// Id of the element the forecast is drawn into
pub const CHART_CONTAINER_ID: &str = "predictionChart";

/// Draws forecasts with Plotly into a fixed container element.
pub struct PlotlyRenderer {
    div_id: String,
}

/// A live Plotly chart, identified by its container
#[derive(Debug)]
pub struct PlotlyChart {
    div_id: String,
}

impl PlotlyRenderer {
    pub fn new(div_id: impl Into<String>) -> Self {
        Self {
            div_id: div_id.into(),
        }
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|e| format!("{:?}", e))
}

impl ChartRenderer for PlotlyRenderer {
    type Chart = PlotlyChart;
    type Error = String;

    fn render(&mut self, chart: &ForecastChart) -> Result<PlotlyChart, String> {
        log::trace!("Plotting {} points into #{}", chart.len(), self.div_id);

        let data_js = js_sys::Array::new();
        data_js.push(&to_js(&chart.trace())?);
        let layout_js = to_js(&chart.layout())?;
        let config_js = js_sys::JSON::parse(r#"{"responsive":true}"#).map_err(|e| format!("{:?}", e))?;

        newPlot(&self.div_id, data_js.into(), layout_js, config_js).map_err(|e| format!("{:?}", e))?;

        Ok(PlotlyChart {
            div_id: self.div_id.clone(),
        })
    }

    fn destroy(&mut self, chart: PlotlyChart) {
        log::trace!("Purging chart in #{}", chart.div_id);
        if let Err(e) = purge(&chart.div_id) {
            log::warn!("Failed to purge chart #{}: {:?}", chart.div_id, e);
        }
    }
}

#[function_component(PredictionChart)]
pub fn prediction_chart() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Forecast"}</h3>
                <div id={CHART_CONTAINER_ID} style="width:100%; height:400px;"></div>
            </div>
        </div>
    }
}
