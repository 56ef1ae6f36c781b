#![cfg(target_arch = "wasm32")]

use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll};

use futures::future::{Either, select};
use futures::task::noop_waker_ref;
use gloo::timers::future::TimeoutFuture;
use share_url::page::{WebClipboard, WindowFocus, document_has_focus, share_from_menu};
use share_url::{ClickInfo, ClipboardError, FocusSignal};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{DomException, Event};

wasm_bindgen_test_configure!(run_in_browser);

fn fire_focus() {
    let event = Event::new("focus").unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

/// Replace `navigator.share` with a function built from `body`
fn stub_share(body: &str) {
    let navigator = web_sys::window().unwrap().navigator();
    let share = js_sys::Function::new_with_args("data", body);
    js_sys::Reflect::set(&navigator, &JsValue::from_str("share"), &share).unwrap();
}

fn last_shared() -> JsValue {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("lastShared")).unwrap()
}

fn click(id: &str) -> ClickInfo {
    ClickInfo {
        menu_item_id: id.to_string(),
        ..ClickInfo::default()
    }
}

#[wasm_bindgen_test]
async fn test_focus_event_resolves_wait() {
    let focus = WindowFocus::default();
    let wait = pin!(focus.focused());
    let fire = async {
        TimeoutFuture::new(20).await;
        fire_focus();
        TimeoutFuture::new(1000).await;
    };

    let outcome = select(wait, pin!(fire)).await;

    assert!(matches!(outcome, Either::Left(_)));
    assert_eq!(focus.armed_listeners(), 0);
}

#[wasm_bindgen_test]
fn test_dropped_wait_detaches_listener() {
    let focus = WindowFocus::default();
    let mut cx = Context::from_waker(noop_waker_ref());

    {
        let mut wait = pin!(focus.focused());
        assert!(wait.as_mut().poll(&mut cx).is_pending());
        assert_eq!(focus.armed_listeners(), 1);
    }

    assert_eq!(focus.armed_listeners(), 0);
    fire_focus();
    assert_eq!(focus.armed_listeners(), 0);
}

#[wasm_bindgen_test]
fn test_unfocused_wait_stays_pending() {
    let focus = WindowFocus::default();
    let mut cx = Context::from_waker(noop_waker_ref());
    let mut wait = pin!(focus.focused());

    assert!(wait.as_mut().poll(&mut cx).is_pending());
    assert!(wait.as_mut().poll(&mut cx).is_pending());

    fire_focus();

    assert_eq!(wait.as_mut().poll(&mut cx), Poll::Ready(()));
    assert_eq!(focus.armed_listeners(), 0);
}

#[wasm_bindgen_test]
fn test_classify_write_errors() {
    let plain = WebClipboard::classify(js_sys::Error::new("Write permission denied.").into());
    assert_eq!(plain, ClipboardError::Platform("Write permission denied.".to_string()));

    let dom = DomException::new_with_message_and_name("Document is not focused.", "NotAllowedError").unwrap();
    let expected = if document_has_focus() {
        ClipboardError::Platform("NotAllowedError: Document is not focused.".to_string())
    } else {
        ClipboardError::NotFocused
    };
    assert_eq!(WebClipboard::classify(dom.into()), expected);
}

#[wasm_bindgen_test]
async fn test_share_ignores_unresolvable_click() {
    stub_share("globalThis.lastShared = data; return Promise.resolve();");
    js_sys::Reflect::set(&js_sys::global(), &JsValue::from_str("lastShared"), &JsValue::NULL).unwrap();

    share_from_menu(&click("image")).await;
    share_from_menu(&click("page")).await;

    assert!(last_shared().is_null());
}

#[wasm_bindgen_test]
async fn test_share_swallows_rejection() {
    stub_share(
        "globalThis.lastShared = data; \
         return Promise.reject(new DOMException('Share canceled', 'AbortError'));",
    );
    let info = ClickInfo {
        link_url: Some("  https://docs.rs/yew  ".to_string()),
        ..click("link")
    };

    share_from_menu(&info).await;

    let url = js_sys::Reflect::get(&last_shared(), &JsValue::from_str("url")).unwrap();
    assert_eq!(url.as_string().as_deref(), Some("https://docs.rs/yew"));
}

#[wasm_bindgen_test]
async fn test_share_swallows_thrown_error() {
    stub_share("throw new TypeError('navigator.share is not available');");
    let info = ClickInfo {
        selection_text: Some("hello".to_string()),
        ..click("selection")
    };

    share_from_menu(&info).await;
}
