/// Command and context menu dispatch
///
/// Decides what happens for each trigger. Everything that touches the
/// browser goes through `ExtensionHost`, so the decisions can be tested
/// without one.
use thiserror::Error;

use crate::compose::is_absolute_url;
use crate::config::{COPIED_TOAST_TEXT, COPY_COMMAND};
use crate::context::{MenuEntry, ShareContext, menu_entries};
use crate::tab_data::{ClickInfo, CopyArgs, TabInfo};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("script injection failed: {0}")]
    Injection(String),
    #[error("failed to decode {what}: {message}")]
    Decode { what: &'static str, message: String },
    #[error("{0}")]
    Platform(String),
}

/// Browser capabilities the dispatcher relies on
#[allow(async_fn_in_trait)]
pub trait ExtensionHost {
    /// Active tab of the current window
    async fn active_tab(&self) -> Result<Option<TabInfo>, HostError>;

    /// Run the copy runner in a tab; `None` when it produced no URL
    async fn inject_copy(&self, tab_id: i32, args: &CopyArgs) -> Result<Option<String>, HostError>;

    async fn inject_toast(&self, tab_id: i32, text: &str) -> Result<(), HostError>;

    async fn inject_share(&self, tab_id: i32, info: &ClickInfo) -> Result<(), HostError>;

    /// Remove every context menu entry owned by the extension
    async fn clear_menus(&self) -> Result<(), HostError>;

    fn create_menu(&self, entry: &MenuEntry) -> Result<(), HostError>;
}

/// What a handler ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Ignored,
    Copied(String),
    CopyFailed,
    Shared(ShareContext),
    ShareFailed,
    MenusRegistered(usize),
}

pub struct Dispatcher<H> {
    host: H,
}

impl<H: ExtensionHost> Dispatcher<H> {
    pub fn new(host: H) -> Self {
        Dispatcher { host }
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Keyboard command: copy the active tab's URL, then confirm with a toast
    pub async fn on_command(&self, command: &str) -> Dispatch {
        if command != COPY_COMMAND {
            log::debug!("Ignoring command '{}'", command);
            return Dispatch::Ignored;
        }

        let tab = match self.host.active_tab().await {
            Ok(Some(tab)) => tab,
            Ok(None) => return Dispatch::Ignored,
            Err(e) => {
                log::error!("Failed to get active tab: {}", e);
                return Dispatch::Ignored;
            }
        };

        let Some(page_url) = tab.url.filter(|url| !url.is_empty()) else {
            return Dispatch::Ignored;
        };
        let Some(tab_id) = tab.id else {
            log::warn!("Active tab has no id, not copying {}", page_url);
            return Dispatch::Ignored;
        };
        if !is_absolute_url(&page_url) {
            log::warn!("Not an absolute URL, not copying: {}", page_url);
            return Dispatch::Ignored;
        }

        let args = CopyArgs { page_url };
        let copied = match self.host.inject_copy(tab_id, &args).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                log::warn!("Copy in tab {} produced no URL", tab_id);
                return Dispatch::CopyFailed;
            }
            Err(e) => {
                log::error!("Failed to copy page url in tab {}: {}", tab_id, e);
                return Dispatch::CopyFailed;
            }
        };

        log::info!("Copied {}", copied);
        if let Err(e) = self.host.inject_toast(tab_id, COPIED_TOAST_TEXT).await {
            log::error!("Failed to show toast in tab {}: {}", tab_id, e);
        }
        Dispatch::Copied(copied)
    }

    /// Context menu click: open the share sheet in the originating tab
    pub async fn on_menu_click(&self, info: &ClickInfo, tab: Option<&TabInfo>) -> Dispatch {
        let Some(context) = ShareContext::from_menu_item_id(&info.menu_item_id) else {
            return Dispatch::Ignored;
        };
        let Some(tab_id) = tab.and_then(|tab| tab.id) else {
            log::warn!("Menu item '{}' clicked outside of a tab", context);
            return Dispatch::Ignored;
        };

        match self.host.inject_share(tab_id, info).await {
            Ok(()) => Dispatch::Shared(context),
            Err(e) => {
                log::error!("Error sharing {} in tab {}: {}", context, tab_id, e);
                Dispatch::ShareFailed
            }
        }
    }

    /// Install/startup: (re)register one menu entry per share context
    pub async fn on_installed(&self) -> Dispatch {
        if let Err(e) = self.host.clear_menus().await {
            log::warn!("Failed to clear context menus: {}", e);
        }

        let registered = menu_entries()
            .iter()
            .filter(|entry| match self.host.create_menu(entry) {
                Ok(()) => true,
                Err(e) => {
                    log::error!("Failed to create menu '{}': {}", entry.id, e);
                    false
                }
            })
            .count();

        log::info!("Registered {} context menu entries", registered);
        Dispatch::MenusRegistered(registered)
    }
}
