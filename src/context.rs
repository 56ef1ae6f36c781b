/// Context menu entry points and share target resolution
use crate::tab_data::{ClickInfo, ShareData};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The context menu entry that was invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareContext {
    Page,
    Selection,
    Link,
}

impl ShareContext {
    pub const ALL: [ShareContext; 3] = [ShareContext::Page, ShareContext::Selection, ShareContext::Link];

    /// Parse a menu item identifier; anything other than the three supported ids yields `None`
    pub fn from_menu_item_id(id: &str) -> Option<ShareContext> {
        match id {
            "page" => Some(ShareContext::Page),
            "selection" => Some(ShareContext::Selection),
            "link" => Some(ShareContext::Link),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShareContext::Page => "page",
            ShareContext::Selection => "selection",
            ShareContext::Link => "link",
        }
    }

    pub fn title(&self) -> String {
        format!("Share {}", self.as_str())
    }
}

impl fmt::Display for ShareContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create properties for one context menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuEntry {
    pub id: String,
    pub title: String,
    pub contexts: Vec<String>,
}

impl From<ShareContext> for MenuEntry {
    fn from(context: ShareContext) -> Self {
        MenuEntry {
            id: context.as_str().to_string(),
            title: context.title(),
            contexts: vec![context.as_str().to_string()],
        }
    }
}

/// The entries registered on install/startup, one per supported context
pub fn menu_entries() -> Vec<MenuEntry> {
    ShareContext::ALL.into_iter().map(MenuEntry::from).collect()
}

/// What a context menu click shares
#[derive(Debug, Clone, PartialEq)]
pub enum ShareTarget {
    PageUrl(String),
    LinkUrl(String),
    SelectionText(String),
}

impl ShareTarget {
    /// Resolve the share subject for a click.
    ///
    /// Link and page clicks share the trimmed link URL, falling back to the
    /// page URL. Selection clicks share the selected text as-is.
    pub fn resolve(info: &ClickInfo) -> Option<ShareTarget> {
        match ShareContext::from_menu_item_id(&info.menu_item_id)? {
            ShareContext::Link | ShareContext::Page => {
                match (non_empty(&info.link_url), non_empty(&info.page_url)) {
                    (Some(link), _) => Some(ShareTarget::LinkUrl(link.trim().to_string())),
                    (None, Some(page)) => Some(ShareTarget::PageUrl(page.trim().to_string())),
                    (None, None) => None,
                }
            }
            ShareContext::Selection => info
                .selection_text
                .clone()
                .map(ShareTarget::SelectionText),
        }
    }

    pub fn to_share_data(&self) -> ShareData {
        match self {
            ShareTarget::PageUrl(url) | ShareTarget::LinkUrl(url) => ShareData {
                url: Some(url.clone()),
                text: None,
            },
            ShareTarget::SelectionText(text) => ShareData {
                url: None,
                text: Some(text.clone()),
            },
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(id: &str) -> ClickInfo {
        ClickInfo {
            menu_item_id: id.to_string(),
            ..ClickInfo::default()
        }
    }

    #[test]
    fn test_from_menu_item_id() {
        assert_eq!(ShareContext::from_menu_item_id("page"), Some(ShareContext::Page));
        assert_eq!(ShareContext::from_menu_item_id("selection"), Some(ShareContext::Selection));
        assert_eq!(ShareContext::from_menu_item_id("link"), Some(ShareContext::Link));
        assert_eq!(ShareContext::from_menu_item_id("image"), None);
        assert_eq!(ShareContext::from_menu_item_id("Page"), None);
        assert_eq!(ShareContext::from_menu_item_id(""), None);
    }

    #[test]
    fn test_menu_entries() {
        let entries = menu_entries();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id, "page");
        assert_eq!(entries[0].title, "Share page");
        assert_eq!(entries[1].title, "Share selection");
        assert_eq!(entries[2].title, "Share link");
        assert_eq!(entries[2].contexts, vec!["link".to_string()]);
    }

    #[test]
    fn test_resolve_link_prefers_link_url() {
        let info = ClickInfo {
            link_url: Some("  https://docs.rs/yew  ".to_string()),
            page_url: Some("https://crates.io/".to_string()),
            ..click("link")
        };

        assert_eq!(
            ShareTarget::resolve(&info),
            Some(ShareTarget::LinkUrl("https://docs.rs/yew".to_string()))
        );
    }

    #[test]
    fn test_resolve_page_falls_back_to_page_url() {
        let info = ClickInfo {
            page_url: Some("https://crates.io/ \n".to_string()),
            ..click("page")
        };

        assert_eq!(
            ShareTarget::resolve(&info),
            Some(ShareTarget::PageUrl("https://crates.io/".to_string()))
        );
    }

    #[test]
    fn test_resolve_selection() {
        let info = ClickInfo {
            selection_text: Some(" some words ".to_string()),
            page_url: Some("https://crates.io/".to_string()),
            ..click("selection")
        };

        let target = ShareTarget::resolve(&info).unwrap();

        assert_eq!(target, ShareTarget::SelectionText(" some words ".to_string()));
        assert_eq!(target.to_share_data().text.as_deref(), Some(" some words "));
        assert_eq!(target.to_share_data().url, None);
    }

    #[test]
    fn test_resolve_unsupported_or_empty() {
        assert_eq!(ShareTarget::resolve(&click("image")), None);
        assert_eq!(ShareTarget::resolve(&click("page")), None);
        assert_eq!(ShareTarget::resolve(&click("selection")), None);
    }
}
