/// Toast lifecycle and styling
///
/// A toast goes `Absent → Visible → Fading → Removed`. Events that do not
/// apply to the current phase are ignored, so a late timer or a second
/// Escape can never remove the toast twice.
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPhase {
    #[default]
    Absent,
    Visible,
    Fading,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEvent {
    Shown,
    TimeoutElapsed,
    EscapePressed,
    FadeFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    Timeout,
    Escape,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastLifecycle {
    pub phase: ToastPhase,
    pub dismissed_by: Option<Dismissal>,
}

impl ToastLifecycle {
    pub fn apply(&self, event: ToastEvent) -> ToastLifecycle {
        let (phase, dismissed_by) = match (self.phase, event) {
            (ToastPhase::Absent, ToastEvent::Shown) => (ToastPhase::Visible, None),
            (ToastPhase::Visible, ToastEvent::TimeoutElapsed) => (ToastPhase::Fading, Some(Dismissal::Timeout)),
            (ToastPhase::Visible, ToastEvent::EscapePressed) => (ToastPhase::Fading, Some(Dismissal::Escape)),
            (ToastPhase::Fading, ToastEvent::FadeFinished) => (ToastPhase::Removed, self.dismissed_by),
            _ => (self.phase, self.dismissed_by),
        };
        ToastLifecycle { phase, dismissed_by }
    }

    /// Whether the dismiss timer and Escape listener should be live
    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.phase == ToastPhase::Visible
    }
}

impl Reducible for ToastLifecycle {
    type Action = ToastEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Theme {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }

    fn colors(&self) -> (&'static str, &'static str) {
        match self {
            Theme::Dark => ("#333", "#fff"),
            Theme::Light => ("#f5f5f5", "#333"),
        }
    }
}

/// Stylesheet placed inside the toast's shadow root
pub fn stylesheet(theme: Theme) -> String {
    let (background, color) = theme.colors();
    format!(
        r#"
@keyframes slideIn {{
  0% {{ transform: translateY(-100%); opacity: 0; }}
  70% {{ transform: translateY(3px); opacity: 1; }}
  100% {{ transform: translateY(0); opacity: 1; }}
}}

.toast {{
  position: fixed;
  top: 10px;
  right: 10px;
  background: {background};
  color: {color};
  border: 1px solid rgba(128, 128, 128, 0.3);
  box-shadow: 0 4px 8px rgba(0, 0, 0, 0.2);
  padding: 12px 24px;
  border-radius: 4px;
  font-weight: bold;
  font-size: 12px;
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI',
               Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  z-index: 10000;
  animation: slideIn 0.3s cubic-bezier(0.175, 0.885, 0.32, 1.275);
  transition: opacity 0.15s ease-out, transform 0.15s ease-out;
}}

.toast.hiding {{
  opacity: 0;
  transform: translateY(-100%);
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown() -> ToastLifecycle {
        ToastLifecycle::default().apply(ToastEvent::Shown)
    }

    #[test]
    fn test_timeout_path() {
        let visible = shown();
        assert_eq!(visible.phase, ToastPhase::Visible);
        assert!(visible.is_armed());

        let fading = visible.apply(ToastEvent::TimeoutElapsed);
        assert_eq!(fading.phase, ToastPhase::Fading);
        assert_eq!(fading.dismissed_by, Some(Dismissal::Timeout));
        assert!(!fading.is_armed());

        let removed = fading.apply(ToastEvent::FadeFinished);
        assert_eq!(removed.phase, ToastPhase::Removed);
    }

    #[test]
    fn test_escape_path() {
        let fading = shown().apply(ToastEvent::EscapePressed);

        assert_eq!(fading.phase, ToastPhase::Fading);
        assert_eq!(fading.dismissed_by, Some(Dismissal::Escape));
        assert_eq!(fading.apply(ToastEvent::FadeFinished).phase, ToastPhase::Removed);
    }

    #[test]
    fn test_late_events_are_ignored() {
        let fading = shown().apply(ToastEvent::EscapePressed);

        assert_eq!(fading.apply(ToastEvent::TimeoutElapsed), fading);
        assert_eq!(fading.apply(ToastEvent::EscapePressed), fading);

        let removed = fading.apply(ToastEvent::FadeFinished);
        for event in [
            ToastEvent::Shown,
            ToastEvent::TimeoutElapsed,
            ToastEvent::EscapePressed,
            ToastEvent::FadeFinished,
        ] {
            assert_eq!(removed.apply(event), removed);
        }
    }

    #[test]
    fn test_absent_only_accepts_shown() {
        let absent = ToastLifecycle::default();

        assert_eq!(absent.apply(ToastEvent::EscapePressed), absent);
        assert_eq!(absent.apply(ToastEvent::FadeFinished), absent);
    }

    #[test]
    fn test_reduce_keeps_same_rc_when_unchanged() {
        let visible = Rc::new(shown());
        let again = visible.clone().reduce(ToastEvent::Shown);

        assert!(Rc::ptr_eq(&visible, &again));
    }

    #[test]
    fn test_stylesheet_themes() {
        let dark = stylesheet(Theme::from_prefers_dark(true));
        let light = stylesheet(Theme::from_prefers_dark(false));

        assert!(dark.contains("background: #333;"));
        assert!(dark.contains("color: #fff;"));
        assert!(light.contains("background: #f5f5f5;"));
        assert!(light.contains("color: #333;"));
        assert!(light.contains(".toast.hiding"));
    }
}
