use gloo_net::http::Request;
use log::info;
use web_sys::FormData;

use super::error::DeliveryError;
use super::request::LeadPayload;

fn js_err(value: wasm_bindgen::JsValue) -> DeliveryError {
    DeliveryError::Transport(format!("{:?}", value))
}

/// Posts a lead to the form sink as multipart fields. Any 2xx counts as delivered.
pub async fn deliver(endpoint: &str, payload: &LeadPayload) -> Result<(), DeliveryError> {
    let form = FormData::new().map_err(js_err)?;
    for (field, value) in payload.form_fields() {
        form.append_with_str(field, value).map_err(js_err)?;
    }

    let response = Request::post(endpoint)
        .body(form)
        .send()
        .await
        .map_err(|e| DeliveryError::Transport(e.to_string()))?;

    if response.ok() {
        info!("Callback request delivered for slot {}", payload.time_slot.as_str());
        Ok(())
    } else {
        Err(DeliveryError::Rejected {
            status: response.status(),
        })
    }
}
