use crate::error::ExportError;
use crate::types::ReportFile;

/// Hands `file` to the browser as a download through a Blob object URL. The
/// link is attached to the page for the click and the URL is revoked after
/// `DOWNLOAD_REVOKE_DELAY_MS`.
#[cfg(target_arch = "wasm32")]
pub fn offer_download(file: &ReportFile) -> Result<(), ExportError> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    use crate::constants::DOWNLOAD_REVOKE_DELAY_MS;

    let failed = |value: JsValue| {
        ExportError::Download(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    };

    let window =
        web_sys::window().ok_or_else(|| ExportError::Download("no browser window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Download("no document to attach the link to".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::Download("document has no body".into()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
    let props = BlobPropertyBag::new();
    props.set_type(file.mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props).map_err(failed)?;
    let href = Url::create_object_url_with_blob(&blob).map_err(failed)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(failed)?
        .dyn_into()
        .map_err(|_| ExportError::Download("created element is not an anchor".into()))?;
    anchor.set_href(&href);
    anchor.set_download(&file.file_name);

    body.append_child(&anchor).map_err(failed)?;
    anchor.click();
    anchor.remove();

    let revoke = Closure::once_into_js(move || {
        let _ = Url::revoke_object_url(&href);
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            revoke.unchecked_ref(),
            DOWNLOAD_REVOKE_DELAY_MS,
        )
        .map_err(failed)?;

    tracing::info!(file = %file.file_name, "report offered for download");
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn offer_download(file: &ReportFile) -> Result<(), ExportError> {
    Err(ExportError::Download(format!(
        "{} can only be downloaded in the browser",
        file.file_name
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_url_outlives_the_click() {
        assert!(crate::constants::DOWNLOAD_REVOKE_DELAY_MS >= 100);
    }

    #[test]
    fn native_download_reports_error() {
        let file = ReportFile {
            file_name: "polity-report-ru-2026-01-02.json".into(),
            mime_type: "application/json",
            contents: "{}".into(),
        };
        let err = offer_download(&file).unwrap_err();
        assert!(matches!(err, ExportError::Download(ref msg) if msg.contains("polity-report-ru")));
    }
}
