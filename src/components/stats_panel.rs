use super::app::UserContext;
use crate::model::Rank;
use crate::util::format_with_commas;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub score: u64,
    pub rank: Rank,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let username = use_context::<UserContext>()
        .map(|u| u.username)
        .unwrap_or_else(|| String::from("guest"));

    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:90px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#8b949e;", icon_style)}>{"👤"}</span>
                <span style={format!("{} color:#8b949e;", label_style)}>{"Player"}</span>
                <span style={format!("{} color:#8b949e;", value_style)}>{ username }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"🪙"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Coins"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ format_with_commas(props.score) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"🏅"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Rank"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ props.rank.key() }</span>
            </div>
        </div>
    }
}
