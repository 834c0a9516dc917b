use super::model::OrderUpload;
use crate::shared::api_utils::{settle_envelope, ApiError};
use crate::shared::config::AppConfig;
use contracts::usecases::u501_process_orders::{
    ProcessOrdersResponse, ProcessingResult, MASTER_FILE_FIELD, ORDER_FILES_FIELD,
};
use wasm_bindgen::JsCast;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

fn browser_err(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Browser(format!("{e:?}"))
}

fn build_form(upload: &OrderUpload<web_sys::File>) -> Result<FormData, ApiError> {
    let form_data = FormData::new().map_err(browser_err)?;
    if let Some(master) = &upload.master_file {
        form_data
            .append_with_blob(MASTER_FILE_FIELD, master)
            .map_err(browser_err)?;
    }
    for file in &upload.order_files {
        form_data
            .append_with_blob(ORDER_FILES_FIELD, file)
            .map_err(browser_err)?;
    }
    Ok(form_data)
}

/// `POST /process-orders` as multipart form data.
pub async fn process_orders(
    config: &AppConfig,
    upload: OrderUpload<web_sys::File>,
) -> Result<ProcessingResult, ApiError> {
    let form_data = build_form(&upload)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request = Request::new_with_str_and_init(&config.url("/process-orders"), &opts)
        .map_err(browser_err)?;

    let window = web_sys::window().ok_or_else(|| ApiError::Browser("no window".to_string()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Decode("not a Response".to_string()))?;

    let http_ok = resp.ok();
    let status = resp.status();
    let decoded = match resp.json() {
        Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| format!("{e:?}"))
            .and_then(|json| {
                serde_wasm_bindgen::from_value::<ProcessOrdersResponse>(json)
                    .map_err(|e| e.to_string())
            }),
        Err(e) => Err(format!("{e:?}")),
    };

    settle_envelope(http_ok, status, decoded, ProcessOrdersResponse::into_result)
}
