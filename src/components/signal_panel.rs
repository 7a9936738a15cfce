use yew::prelude::*;

use crate::model::{Signal, SwipeDirection};

#[derive(Properties, PartialEq, Clone)]
pub struct SignalPanelProps {
    pub last: Option<Signal>,
    pub counts: [u32; 4],
}

#[function_component]
pub fn SignalPanel(props: &SignalPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // glyph | key | count
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:50px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let last = match props.last {
        Some(s) => format!("{} {} ({})", s.dir.glyph(), s.dir.key(), s.source.label()),
        None => "none yet".to_string(),
    };
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style="font-weight:600; color:#58a6ff;">{ format!("Last: {}", last) }</div>
            { for SwipeDirection::ALL.iter().zip(props.counts.iter()).map(|(dir, count)| html! {
                <div style={row_style}>
                    <span style={icon_style}>{ dir.glyph() }</span>
                    <span style={label_style}>{ dir.key() }</span>
                    <span style={value_style}>{ *count }</span>
                </div>
            }) }
        </div>
    }
}
