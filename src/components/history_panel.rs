use yew::prelude::*;

use crate::model::Signal;

#[derive(Properties, PartialEq, Clone)]
pub struct HistoryPanelProps {
    /// Most recent first.
    pub history: Vec<Signal>,
}

#[function_component]
pub fn HistoryPanel(props: &HistoryPanelProps) -> Html {
    html! {
        <div style="position:absolute; bottom:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; min-width:200px; display:flex; flex-direction:column; gap:4px; font-size:12px;">
            <div style="font-weight:600; opacity:0.8;">{"Recent"}</div>
            if props.history.is_empty() {
                <div style="opacity:0.6;">{"Swipe or press an arrow key"}</div>
            } else {
                { for props.history.iter().map(|s| html! {
                    <div key={s.seq.to_string()} style="display:flex; gap:8px; font-variant-numeric:tabular-nums;">
                        <span style="opacity:0.6; min-width:28px;">{ format!("#{}", s.seq) }</span>
                        <span style="flex:1;">{ format!("{} {}", s.dir.glyph(), s.dir.key()) }</span>
                        <span style="opacity:0.7;">{ s.source.label() }</span>
                    </div>
                }) }
            }
        </div>
    }
}
