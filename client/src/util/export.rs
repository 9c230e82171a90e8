//! CSV export of the faculty review table.
//!
//! The CSV is built natively (and tested natively); only [`download_csv`]
//! touches the DOM, handing the bytes to the browser as a `Blob` download.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::net::types::FilterType;
use crate::state::faculty_attendance::RecordsTable;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv flush failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv output was not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("download unavailable: {0}")]
    Browser(String),
}

/// Render `table` with its header row.
pub fn records_csv(table: &RecordsTable) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(table.headers())?;
    for row in table.cells() {
        writer.write_record(&row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// `attendance-<subject>-<filter>.csv`
#[must_use]
pub fn export_file_name(subject_id: &str, filter_type: FilterType) -> String {
    let subject = if subject_id.is_empty() { "all" } else { subject_id };
    format!("attendance-{subject}-{}.csv", filter_type.as_str())
}

/// Offer `content` to the user as a file download.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn download_csv(file_name: &str, content: &str) -> Result<(), ExportError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let browser = |e: wasm_bindgen::JsValue| ExportError::Browser(format!("{e:?}"));

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(browser)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ExportError::Browser("no document".to_owned()))?;
        let anchor = document
            .create_element("a")
            .map_err(browser)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ExportError::Browser("anchor cast failed".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        web_sys::Url::revoke_object_url(&url).map_err(browser)?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ExportError::Browser("not available on server".to_owned()))
    }
}
