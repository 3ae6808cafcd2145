use super::{energy_bar::EnergyBar, stats_panel::StatsPanel};
use crate::model::{EconomyAction, EconomyState, POPUP_LIFETIME_SECS};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CoinViewProps {
    pub economy: UseReducerHandle<EconomyState>,
    pub to_boosts: Callback<()>,
}

/// Horizontal scatter so popups from rapid taps don't stack exactly.
fn tap_jitter() -> f64 {
    (js_sys::Math::random() * 21.0).floor() - 10.0
}

#[function_component(CoinView)]
pub fn coin_view(props: &CoinViewProps) -> Html {
    let pressed = use_state(|| false);

    let eco = (*props.economy).clone();
    // Out of energy for even one tap: coin goes to sleep until it recharges.
    let asleep = eco.energy < eco.multiplier;

    let on_mouse_down = {
        let economy = props.economy.clone();
        let pressed = pressed.clone();
        Callback::from(move |e: MouseEvent| {
            pressed.set(true);
            economy.dispatch(EconomyAction::Tap {
                x: e.client_x() as f64 + tap_jitter(),
                y: e.client_y() as f64,
            });
        })
    };
    let on_mouse_up = {
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| pressed.set(false))
    };
    let on_touch_start = {
        let economy = props.economy.clone();
        let pressed = pressed.clone();
        Callback::from(move |e: TouchEvent| {
            // Stop the synthesized mousedown that would count the tap twice.
            e.prevent_default();
            if let Some(touch) = e.touches().item(0) {
                pressed.set(true);
                economy.dispatch(EconomyAction::Tap {
                    x: touch.client_x() as f64 + tap_jitter(),
                    y: touch.client_y() as f64,
                });
            }
        })
    };
    let on_touch_end = {
        let pressed = pressed.clone();
        Callback::from(move |e: TouchEvent| {
            e.prevent_default();
            pressed.set(false);
        })
    };

    let to_boosts_click = {
        let cb = props.to_boosts.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    // Floating score popups: opacity and rise derived from remaining ttl.
    let popups: Html = eco
        .popups
        .iter()
        .map(|p| {
            let life = (p.ttl / POPUP_LIFETIME_SECS).clamp(0.0, 1.0);
            let rise = (POPUP_LIFETIME_SECS - p.ttl).max(0.0) * 150.0;
            html! {
                <div key={p.id.to_string()} style={format!(
                    "position:fixed; left:{:.0}px; top:{:.0}px; transform:translate(-50%, -100%); \
                     font-size:28px; font-weight:700; color:#ffffff; pointer-events:none; \
                     opacity:{:.2}; z-index:30;",
                    p.x, p.y - 50.0 - rise, life)}>
                    { format!("+{}", p.amount) }
                </div>
            }
        })
        .collect();

    let coin_style = format!(
        "width:260px; height:260px; border-radius:50%; \
         background:radial-gradient(circle at 35% 30%, #ffe8a3, #f3ba2f 60%, #b8860b); \
         border:6px solid #d4af37; box-shadow:0 10px 24px rgba(0,0,0,0.45); \
         display:flex; align-items:center; justify-content:center; \
         user-select:none; -webkit-user-select:none; touch-action:manipulation; cursor:pointer; \
         transform:scale({}); opacity:{};",
        if *pressed { "0.96" } else { "1.0" },
        if asleep { "0.45" } else { "1.0" },
    );

    html! {
        <div style="position:relative; width:100vw; height:100vh; background:#0d1117; color:#c9d1d9; overflow:hidden;">
            <StatsPanel score={eco.score} rank={eco.rank} />
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:6px;">
                <button onclick={to_boosts_click}>{"Boosts"}</button>
            </div>
            <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%);">
                <div
                    style={coin_style}
                    onmousedown={on_mouse_down}
                    onmouseup={on_mouse_up.clone()}
                    onmouseleave={on_mouse_up}
                    ontouchstart={on_touch_start}
                    ontouchend={on_touch_end.clone()}
                    ontouchcancel={on_touch_end}
                >
                    <span style="font-size:72px; pointer-events:none;">{"🪙"}</span>
                </div>
            </div>
            { if asleep {
                html! { <div style="position:absolute; top:calc(50% + 160px); left:50%; transform:translateX(-50%); font-size:13px; opacity:0.7;">
                    {"Recharging…"}
                </div> }
            } else { html! {} } }
            <EnergyBar energy={eco.energy} max_energy={eco.max_energy} recharge_rate={eco.recharge_rate} />
            { popups }
        </div>
    }
}
