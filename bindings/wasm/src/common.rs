use anyhow::{anyhow, Result};
use districtview_core::DownloadSink;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub(crate) const CSV_MIME: &str = "text/csv;charset=utf-8;";

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Serialize into a plain JS value (objects, not Maps).
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(js_err)
}

pub(crate) fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// Triggers a browser download through a temporary object URL and a hidden anchor.
pub(crate) struct BrowserDownload {
    mime: &'static str,
}

impl BrowserDownload {
    pub(crate) fn csv() -> Self { Self { mime: CSV_MIME } }
}

impl DownloadSink for BrowserDownload {
    fn offer(&mut self, filename: &str, content: &[u8]) -> Result<()> {
        let js = |e: JsValue| anyhow!("{e:?}");

        let array = js_sys::Uint8Array::from(content);
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(self.mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts).map_err(js)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| anyhow!("document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a").map_err(js)?
            .dyn_into()
            .map_err(|_| anyhow!("anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document.body()
            .ok_or_else(|| anyhow!("document has no body"))?
            .append_child(&anchor).map_err(js)?;
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();
        Ok(())
    }
}
