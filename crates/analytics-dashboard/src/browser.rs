//! Browser glue: alerts, document attributes and file downloads

use wasm_bindgen::JsCast;
use web_sys::window;

use crate::error::ReportError;

/// Attribute of the document root element, if set.
pub fn root_attribute(name: &str) -> Option<String> {
    window()?
        .document()?
        .document_element()?
        .get_attribute(name)
}

/// Origin of the current page.
pub fn origin() -> Option<String> {
    window()?.location().origin().ok()
}

/// Show a blocking alert. Logged instead when there is no window.
pub fn alert(message: &str) {
    match window() {
        Some(win) => {
            if win.alert_with_message(message).is_err() {
                log::error!("Failed to show alert: {}", message);
            }
        }
        None => log::warn!("No window for alert: {}", message),
    }
}

/// Whether an element with `id` is currently mounted.
pub fn element_mounted(id: &str) -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .is_some()
}

/// Hand `bytes` to the browser as a download named `filename`.
pub fn download_bytes(bytes: &[u8], filename: &str) -> Result<(), ReportError> {
    let win = window().ok_or_else(|| ReportError::Download("no browser window".to_string()))?;
    let document = win
        .document()
        .ok_or_else(|| ReportError::Download("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| ReportError::Download("no document body".to_string()))?;

    let data = js_sys::Uint8Array::from(bytes);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&js_sys::Array::of1(&data))
        .map_err(|e| ReportError::Download(format!("{:?}", e)))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| ReportError::Download(format!("{:?}", e)))?;

    let result = (|| {
        let anchor = document.create_element("a")?;
        anchor.set_attribute("href", &url)?;
        anchor.set_attribute("download", filename)?;
        body.append_child(&anchor)?;
        if let Some(html_a) = anchor.dyn_ref::<web_sys::HtmlElement>() {
            html_a.click();
        }
        body.remove_child(&anchor)?;
        Ok::<(), wasm_bindgen::JsValue>(())
    })();
    let _ = web_sys::Url::revoke_object_url(&url);

    result.map_err(|e| ReportError::Download(format!("{:?}", e)))?;
    log::info!("Downloaded {} ({} bytes)", filename, bytes.len());
    Ok(())
}

/// Local time stamp printed on report pages.
pub fn now_string() -> String {
    chrono::Local::now().format("%d/%m/%Y %H:%M:%S").to_string()
}
