/// Background service worker: chrome API bindings and event handlers

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::PAGE_BOOTSTRAP_FILE;
use crate::context::MenuEntry;
use crate::dispatcher::{Dispatcher, ExtensionHost, HostError};
use crate::interop::{describe_js_error, from_js, to_js};
use crate::tab_data::{ClickInfo, CopyArgs, TabInfo, ToastArgs};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = query)]
    async fn tabs_query(query: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "contextMenus"], js_name = removeAll)]
    async fn context_menus_remove_all() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "contextMenus"], js_name = create)]
    fn context_menus_create(properties: JsValue) -> Result<JsValue, JsValue>;
}

// Import JS bridge functions
#[wasm_bindgen(module = "/js/inject.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = runInTab)]
    async fn run_in_tab(tab_id: i32, bootstrap: &str, entry: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TabQuery {
    active: bool,
    current_window: bool,
}

/// `ExtensionHost` backed by the chrome extension APIs
pub struct ChromeHost;

impl ChromeHost {
    async fn inject(&self, tab_id: i32, entry: &str, args: JsValue) -> Result<JsValue, HostError> {
        run_in_tab(tab_id, PAGE_BOOTSTRAP_FILE, entry, args)
            .await
            .map_err(|e| HostError::Injection(describe_js_error(&e)))
    }
}

fn encode<T: Serialize>(value: &T) -> Result<JsValue, HostError> {
    to_js(value).map_err(HostError::Platform)
}

impl ExtensionHost for ChromeHost {
    async fn active_tab(&self) -> Result<Option<TabInfo>, HostError> {
        let query = encode(&TabQuery {
            active: true,
            current_window: true,
        })?;
        let tabs_js = tabs_query(query)
            .await
            .map_err(|e| HostError::Platform(describe_js_error(&e)))?;
        let tabs: Vec<TabInfo> = from_js(tabs_js).map_err(|message| HostError::Decode {
            what: "tabs",
            message,
        })?;
        Ok(tabs.into_iter().next())
    }

    async fn inject_copy(&self, tab_id: i32, args: &CopyArgs) -> Result<Option<String>, HostError> {
        let result = self.inject(tab_id, "copy_page_url", encode(args)?).await?;
        Ok(result.as_string().filter(|url| !url.is_empty()))
    }

    async fn inject_toast(&self, tab_id: i32, text: &str) -> Result<(), HostError> {
        let args = ToastArgs { text: text.to_string() };
        self.inject(tab_id, "show_toast", encode(&args)?).await.map(|_| ())
    }

    async fn inject_share(&self, tab_id: i32, info: &ClickInfo) -> Result<(), HostError> {
        self.inject(tab_id, "share_from_menu", encode(info)?).await.map(|_| ())
    }

    async fn clear_menus(&self) -> Result<(), HostError> {
        context_menus_remove_all()
            .await
            .map(|_| ())
            .map_err(|e| HostError::Platform(describe_js_error(&e)))
    }

    fn create_menu(&self, entry: &MenuEntry) -> Result<(), HostError> {
        context_menus_create(encode(entry)?)
            .map(|_| ())
            .map_err(|e| HostError::Platform(describe_js_error(&e)))
    }
}

/// Keyboard command forwarded by the worker script
pub async fn handle_command(command: &str) {
    Dispatcher::new(ChromeHost).on_command(command).await;
}

/// Context menu click forwarded by the worker script
pub async fn handle_menu_click(info: JsValue, tab: JsValue) {
    let info: ClickInfo = match from_js(info) {
        Ok(info) => info,
        Err(e) => {
            log::warn!("Ignoring menu click: {}", e);
            return;
        }
    };
    let tab: Option<TabInfo> = from_js(tab).ok();
    Dispatcher::new(ChromeHost).on_menu_click(&info, tab.as_ref()).await;
}

/// Install/startup forwarded by the worker script
pub async fn handle_installed() {
    Dispatcher::new(ChromeHost).on_installed().await;
}
