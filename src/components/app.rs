use log::info;
use yew::prelude::*;

use super::{
    controls_panel::ControlsPanel, history_panel::HistoryPanel, settings_modal::SettingsModal,
    signal_panel::SignalPanel, swipe_pad::SwipePad,
};
use crate::model::{InputSource, Settings, SignalAction, SignalState, SwipeDirection};
use crate::storage::{load_settings, save_settings};
use crate::util::set_gesture_logging;

#[function_component(App)]
pub fn app() -> Html {
    let signals = use_reducer(SignalState::default);
    let settings = use_state(|| load_settings().unwrap_or_default());
    let show_settings = use_state(|| false);

    // Persist settings changes and apply the log level
    use_effect_with((*settings).clone(), move |s| {
        set_gesture_logging(s.log_gestures);
        save_settings(s);
        || ()
    });

    let on_signal = {
        let signals = signals.clone();
        Callback::from(move |(dir, source): (SwipeDirection, InputSource)| {
            info!("signal {} from {}", dir, source.label());
            signals.dispatch(SignalAction::Input { dir, source });
        })
    };
    let on_clear = {
        let signals = signals.clone();
        Callback::from(move |_| signals.dispatch(SignalAction::Clear))
    };
    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let toggle_history = {
        let settings = settings.clone();
        Callback::from(move |_| {
            settings.set(Settings {
                show_history: !settings.show_history,
                ..(*settings).clone()
            })
        })
    };
    let toggle_log = {
        let settings = settings.clone();
        Callback::from(move |_| {
            settings.set(Settings {
                log_gestures: !settings.log_gestures,
                ..(*settings).clone()
            })
        })
    };
    let reset_settings = {
        let settings = settings.clone();
        Callback::from(move |_| settings.set(Settings::default()))
    };

    let big_glyph = signals.last.map(|s| s.dir.glyph()).unwrap_or("·");

    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0d1117; color:#c9d1d9; font-family:sans-serif;">
            <SwipePad on_signal={on_signal}>
                <div style="font-size:120px; opacity:0.35; pointer-events:none;">{ big_glyph }</div>
            </SwipePad>
            <SignalPanel last={signals.last} counts={signals.counts} />
            if settings.show_history {
                <HistoryPanel history={signals.history.iter().copied().collect::<Vec<_>>()} />
            }
            <ControlsPanel total={signals.total()} on_clear={on_clear} on_open_settings={open_settings} />
            <SettingsModal
                show={*show_settings}
                on_close={close_settings}
                show_history={settings.show_history}
                on_toggle_history={toggle_history}
                log_gestures={settings.log_gestures}
                on_toggle_log_gestures={toggle_log}
                on_reset={reset_settings}
            />
        </div>
    }
}
