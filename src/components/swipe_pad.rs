use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, TouchEvent};
use yew::prelude::*;

use crate::model::{InputSource, SwipeDirection};
use crate::state::TouchState;
use crate::util::touch_points;

#[derive(Properties, PartialEq, Clone)]
pub struct SwipePadProps {
    pub on_signal: Callback<(SwipeDirection, InputSource)>,
    #[prop_or_default]
    pub children: Html,
}

/// Full-area surface turning swipes and arrow keys into direction signals.
#[function_component]
pub fn SwipePad(props: &SwipePadProps) -> Html {
    let touch_state = use_mut_ref(TouchState::default);
    // Latest callback for the window listener, which is registered once.
    let on_signal_ref = use_mut_ref(|| props.on_signal.clone());
    *on_signal_ref.borrow_mut() = props.on_signal.clone();

    {
        let on_signal_ref = on_signal_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let keydown_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if let Some(dir) = SwipeDirection::from_key(&e.key()) {
                    e.prevent_default();
                    debug!("keydown {}", dir);
                    let cb = on_signal_ref.borrow().clone();
                    cb.emit((dir, InputSource::Keyboard));
                }
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                win.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                    .ok();
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
                let _keep_alive = &keydown_cb;
            }
        });
    }

    let ontouchstart = {
        let touch_state = touch_state.clone();
        Callback::from(move |e: TouchEvent| {
            touch_state
                .borrow_mut()
                .on_touch_start(&touch_points(&e.touches()));
        })
    };
    let ontouchend = {
        let touch_state = touch_state.clone();
        let on_signal_ref = on_signal_ref.clone();
        Callback::from(move |e: TouchEvent| {
            e.prevent_default();
            let dir = touch_state
                .borrow_mut()
                .on_touch_end(&touch_points(&e.changed_touches()));
            if let Some(dir) = dir {
                let cb = on_signal_ref.borrow().clone();
                cb.emit((dir, InputSource::Touch));
            }
        })
    };

    html! {
        <div
            id="swipe-pad"
            style="position:absolute; inset:0; touch-action:none; user-select:none; display:flex; align-items:center; justify-content:center;"
            {ontouchstart}
            {ontouchend}
        >
            { props.children.clone() }
        </div>
    }
}
