//! File Commands
//!
//! Export through a download link, import through `Blob.text()`.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

use super::{document, js_err};

/// Offer `contents` to the user as a downloaded file
pub fn download_text(file_name: &str, mime: &str, contents: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;

    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;
    let anchor = document()?
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(js_err)?;
    log::debug!("[FILES] offered {} ({} bytes)", file_name, contents.len());
    Ok(())
}

/// Read a picked file as UTF-8 text
pub async fn read_file_text(file: File) -> Result<String, String> {
    let name = file.name();
    let value = JsFuture::from(file.text()).await.map_err(js_err)?;
    let text = value
        .as_string()
        .ok_or_else(|| format!("{} did not read as text", name))?;
    log::debug!("[FILES] read {} ({} bytes)", name, text.len());
    Ok(text)
}
