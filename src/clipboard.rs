/// Clipboard write with focus recovery
///
/// Writing to the clipboard fails while the document does not have focus
/// (e.g. DevTools is focused). Such failures park the copy until the window
/// regains focus, then the write is attempted again, once per focus event.
use std::future::Future;
use thiserror::Error;

use crate::compose::compose_url;
use crate::tab_data::CopyArgs;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipboardError {
    #[error("document is not focused")]
    NotFocused,
    #[error("{0}")]
    Platform(String),
}

/// A copy that could not be completed
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Failed to copy page url")]
pub struct CopyError {
    #[source]
    pub cause: ClipboardError,
}

/// Somewhere plain text can be written to
pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// Resolves the next time the page gains focus
pub trait FocusSignal {
    fn focused(&self) -> impl Future<Output = ()>;
}

/// Progress of a single copy operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    Pending,
    Retrying { attempts: u32 },
    Done,
}

impl RetryState {
    /// State after a write attempt finished with `result`
    pub fn after_attempt(self, result: &Result<(), ClipboardError>) -> RetryState {
        match (self, result) {
            (RetryState::Done, _) => RetryState::Done,
            (_, Ok(())) | (_, Err(ClipboardError::Platform(_))) => RetryState::Done,
            (RetryState::Pending, Err(ClipboardError::NotFocused)) => RetryState::Retrying { attempts: 1 },
            (RetryState::Retrying { attempts }, Err(ClipboardError::NotFocused)) => {
                RetryState::Retrying { attempts: attempts + 1 }
            }
        }
    }
}

/// Write `text`, waiting out focus errors. Resolves with the text that was written.
pub async fn copy_with_focus_retry<C, F>(clipboard: &C, focus: &F, text: &str) -> Result<String, CopyError>
where
    C: ClipboardSink,
    F: FocusSignal,
{
    let mut state = RetryState::Pending;

    loop {
        let result = clipboard.write_text(text).await;
        state = state.after_attempt(&result);

        match (state, result) {
            (RetryState::Retrying { attempts }, _) => {
                if attempts == 1 {
                    log::info!("Hit <Tab> to give focus back to document and copy page details");
                } else {
                    log::debug!("Document still not focused after {} attempts", attempts);
                }
                focus.focused().await;
            }
            (_, Ok(())) => return Ok(text.to_string()),
            (_, Err(cause)) => return Err(CopyError { cause }),
        }
    }
}

/// Compose the shareable URL for `args` and the given selection, then copy it
pub async fn copy_page_url<C, F>(
    clipboard: &C,
    focus: &F,
    args: &CopyArgs,
    selection: &str,
) -> Result<String, CopyError>
where
    C: ClipboardSink,
    F: FocusSignal,
{
    let url = compose_url(&args.page_url, selection);
    copy_with_focus_retry(clipboard, focus, &url).await
}
