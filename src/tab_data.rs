/// Data structures exchanged with the browser and injected scripts
use serde::{Deserialize, Serialize};

/// Information about a browser tab, as reported by `chrome.tabs.query`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TabInfo {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
impl TabInfo {
    pub fn new(id: i32, url: &str) -> TabInfo {
        TabInfo {
            id: Some(id),
            url: Some(url.to_string()),
        }
    }
}

/// Context menu click payload (`chrome.contextMenus.OnClickData`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClickInfo {
    pub menu_item_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_text: Option<String>,
}

/// Input of the in-page copy runner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CopyArgs {
    pub page_url: String,
}

/// Input of the in-page toast renderer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastArgs {
    pub text: String,
}

/// Payload handed to `navigator.share`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShareData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
