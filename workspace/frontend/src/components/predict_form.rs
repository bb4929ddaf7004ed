use common::{
    BusyGuard, InputSource, ModelKind, PredictionController, PredictionRequest, PredictionService,
    SubmitControl, SubmitState,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::prediction_chart::{CHART_CONTAINER_ID, PlotlyRenderer, PredictionChart};
use crate::api_client::GlooPredictionService;
use crate::feedback::notifier::FormNotifier;
use crate::feedback::toast::ToastContext;
use crate::settings;

/// Reads the text field and model selector at submit time.
struct FormInputs {
    data: NodeRef,
    model: NodeRef,
}

impl InputSource for FormInputs {
    fn raw_series(&self) -> String {
        self.data
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn selected_model(&self) -> String {
        self.model
            .cast::<HtmlSelectElement>()
            .map(|select| select.value())
            .unwrap_or_default()
    }
}

/// The submit button's state lives in a Yew state hook.
struct SubmitButton(UseStateHandle<SubmitState>);

impl SubmitControl for SubmitButton {
    fn set_state(&mut self, state: SubmitState) {
        log::trace!("Submit button -> {:?}", state);
        self.0.set(state);
    }
}

#[function_component(PredictForm)]
pub fn predict_form() -> Html {
    let data_ref = use_node_ref();
    let model_ref = use_node_ref();
    let submit_state = use_state(SubmitState::default);
    let toast_ctx = use_context::<ToastContext>();
    let controller = use_mut_ref(|| PredictionController::new(PlotlyRenderer::new(CHART_CONTAINER_ID)));

    let onsubmit = {
        let data_ref = data_ref.clone();
        let model_ref = model_ref.clone();
        let submit_state = submit_state.clone();
        let controller = controller.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::debug!("Prediction form submitted");

            let notifier = FormNotifier::new(settings::get_settings().notice_style, toast_ctx.clone());
            let busy = BusyGuard::engage(SubmitButton(submit_state.clone()));
            let inputs = FormInputs {
                data: data_ref.clone(),
                model: model_ref.clone(),
            };

            let request = match PredictionRequest::from_input(&inputs) {
                Ok(request) => request,
                Err(err) => {
                    controller.borrow().reject(err, &notifier);
                    return;
                }
            };

            // The controller is only borrowed after the response is in, never
            // across the await.
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let _busy = busy;
                let service = GlooPredictionService::from_settings();
                let result = service.predict(&request).await;
                let outcome = controller.borrow_mut().complete(request.model, result, &notifier);
                log::info!("Prediction cycle finished: {}", outcome);
            });
        })
    };

    html! {
        <>
            <div class="card bg-base-100 shadow">
                <form id="predictForm" class="card-body space-y-4" {onsubmit}>
                    <div class="form-control">
                        <label class="label" for="data">
                            <span class="label-text">{"Last 60 closing prices"}</span>
                        </label>
                        <input
                            ref={data_ref}
                            id="data"
                            name="data"
                            type="text"
                            class="input input-bordered w-full"
                            placeholder="e.g. 101.5, 102.25, 99.8, ..."
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="model">
                            <span class="label-text">{"Model"}</span>
                        </label>
                        <select ref={model_ref} id="model" name="model" class="select select-bordered w-full">
                            { for ModelKind::ALL.iter().map(|model| html! {
                                <option value={model.as_str()}>{model.label()}</option>
                            })}
                        </select>
                    </div>
                    <input
                        type="submit"
                        class="btn btn-primary"
                        value={submit_state.label()}
                        disabled={submit_state.is_disabled()}
                    />
                </form>
            </div>
            <PredictionChart />
        </>
    }
}
