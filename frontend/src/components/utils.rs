use gloo_timers::callback::Timeout;
use js_sys::Date;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

pub fn now_timestamp() -> String {
    Date::new_0().to_locale_time_string("en-US").into()
}

/// Formats a server-supplied epoch-seconds scan date; falls back to now.
pub fn format_scan_date(epoch_secs: Option<i64>) -> String {
    let date = match epoch_secs {
        Some(secs) => Date::new(&JsValue::from_f64(secs as f64 * 1000.0)),
        None => Date::new_0(),
    };
    date.to_locale_string("en-US", &JsValue::UNDEFINED).into()
}

pub fn today_iso_date() -> String {
    let iso: String = Date::new_0().to_iso_string().into();
    iso.split('T').next().unwrap_or_default().to_string()
}

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Hands a generated CSV to the browser as a file download.
pub fn download_csv(filename: &str, csv: &str) {
    let blob = gloo_file::Blob::new_with_options(csv, Some("text/csv"));
    let url = gloo_file::ObjectUrl::from(blob);

    let document = web_sys::window()
        .expect("no global `window` exists")
        .document()
        .expect("no document");
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .expect("failed to create anchor")
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
}
