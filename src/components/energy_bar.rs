use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EnergyBarProps {
    pub energy: u64,
    pub max_energy: u64,
    pub recharge_rate: u64,
}

#[function_component]
pub fn EnergyBar(props: &EnergyBarProps) -> Html {
    let fill = if props.max_energy > 0 {
        (props.energy as f64 / props.max_energy as f64) * 100.0
    } else {
        0.0
    };
    html! {
        <div style="position:absolute; bottom:24px; left:50%; transform:translateX(-50%); width:min(420px, 80vw);">
            <div style="display:flex; justify-content:space-between; font-size:13px; margin-bottom:4px;">
                <span style="color:#d29922;">{ format!("⚡ {} / {}", props.energy, props.max_energy) }</span>
                <span style="opacity:0.7;">{ format!("+{}/s", props.recharge_rate) }</span>
            </div>
            <div style="height:10px; background:#161b22; border:1px solid #30363d; border-radius:6px; overflow:hidden;">
                <div style={format!("height:100%; width:{:.1}%; background:#d29922;", fill)}></div>
            </div>
        </div>
    }
}
