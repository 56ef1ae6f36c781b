/// In-page UI
pub mod toast;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ShadowRootInit, ShadowRootMode, Window};
use yew::{AppHandle, AttrValue, Callback};

use crate::config::{DARK_SCHEME_QUERY, TOAST_MARKER_ATTR, TOAST_MARKER_VALUE, toast_selector};
use crate::toast::{Theme, stylesheet};
use self::toast::{Toast, ToastProps};

fn preferred_theme(window: &Window) -> Theme {
    let prefers_dark = window
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());
    Theme::from_prefers_dark(prefers_dark)
}

/// Show a toast with `text` unless one is already on the page.
///
/// The toast lives in a closed shadow root attached to a marker `div`, so
/// page styles and the toast's styles stay apart. Returns whether a toast
/// was created.
pub fn show_toast(text: &str) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    if document.query_selector(&toast_selector())?.is_some() {
        log::debug!("Toast already visible");
        return Ok(false);
    }

    let body = document.body().ok_or("no document body")?;
    let host = document.create_element("div")?;
    host.set_attribute(TOAST_MARKER_ATTR, TOAST_MARKER_VALUE)?;

    let shadow_root = host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Closed))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(stylesheet(preferred_theme(&window)).as_str()));
    shadow_root.append_child(&style)?;
    let mount = document.create_element("div")?;
    shadow_root.append_child(&mount)?;

    body.append_child(&host)?;

    let app: Rc<RefCell<Option<AppHandle<Toast>>>> = Rc::default();
    let on_removed = {
        let app = app.clone();
        let host = host.clone();
        Callback::from(move |_| {
            host.remove();
            if let Some(handle) = app.borrow_mut().take() {
                // Destroy outside of the component's own effect
                spawn_local(async move { handle.destroy() });
            }
        })
    };

    let props = ToastProps {
        text: AttrValue::from(text.to_string()),
        on_removed,
    };
    app.borrow_mut()
        .replace(yew::Renderer::<Toast>::with_root_and_props(mount, props).render());

    Ok(true)
}
