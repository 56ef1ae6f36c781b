/// Toast notification component

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config::{TOAST_DISMISS_MS, TOAST_FADE_MS};
use crate::toast::{ToastEvent, ToastLifecycle, ToastPhase};

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub text: AttrValue,
    /// Emitted once the fade-out has finished
    #[prop_or_default]
    pub on_removed: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let lifecycle = use_reducer(ToastLifecycle::default);
    let phase = lifecycle.phase;

    // Timer and keydown listener live only as long as the phase that created them
    {
        let lifecycle = lifecycle.clone();
        let on_removed = props.on_removed.clone();

        use_effect_with(phase, move |phase| {
            let mut timer: Option<Timeout> = None;
            let mut keydown: Option<EventListener> = None;

            match phase {
                ToastPhase::Absent => lifecycle.dispatch(ToastEvent::Shown),
                ToastPhase::Visible => {
                    let on_timeout = lifecycle.dispatcher();
                    timer = Some(Timeout::new(TOAST_DISMISS_MS, move || {
                        on_timeout.dispatch(ToastEvent::TimeoutElapsed);
                    }));

                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let on_escape = lifecycle.dispatcher();
                        keydown = Some(EventListener::new(&document, "keydown", move |event| {
                            let is_escape = event
                                .dyn_ref::<KeyboardEvent>()
                                .is_some_and(|key| key.key() == "Escape");
                            if is_escape {
                                on_escape.dispatch(ToastEvent::EscapePressed);
                            }
                        }));
                    }
                }
                ToastPhase::Fading => {
                    let on_faded = lifecycle.dispatcher();
                    timer = Some(Timeout::new(TOAST_FADE_MS, move || {
                        on_faded.dispatch(ToastEvent::FadeFinished);
                    }));
                }
                ToastPhase::Removed => {
                    log::debug!("Toast removed ({:?})", lifecycle.dismissed_by);
                    on_removed.emit(());
                }
            }

            move || {
                drop(timer);
                drop(keydown);
            }
        });
    }

    html! {
        <div class={classes!("toast", (phase == ToastPhase::Fading).then_some("hiding"))}>
            {props.text.clone()}
        </div>
    }
}
