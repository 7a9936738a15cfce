use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub total: u32,
    pub on_clear: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px;">
        <button onclick={clear_cb} disabled={props.total == 0}>{"Clear"}</button>
        <button onclick={settings_cb}>{"Settings"}</button>
        <div style="font-size:11px; opacity:0.7;">{ format!("Signals: {}", props.total) }</div>
        <div style="font-size:11px; opacity:0.7;">{"Swipe at least 50px, or use the arrow keys"}</div>
    </div>}
}
