use crate::model::{EconomyState, TRACK_DEFS, TrackId};
use crate::util::format_with_commas;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoostsViewProps {
    pub economy: UseReducerHandle<EconomyState>,
    pub to_coin: Callback<()>,
    pub purchase: Callback<TrackId>,
    pub reset_progress: Callback<()>,
}

fn benefit_text(id: TrackId, benefit: u64) -> String {
    match id {
        TrackId::Multitap => format!("+{} per tap", benefit),
        TrackId::EnergyLimit => format!("+{} energy cap", benefit),
        TrackId::RechargeSpeed => format!("+{}/s recharge", benefit),
    }
}

fn stat_text(id: TrackId, value: u64) -> String {
    match id {
        TrackId::Multitap => format!("{} per tap", value),
        TrackId::EnergyLimit => format!("{} energy cap", value),
        TrackId::RechargeSpeed => format!("{}/s recharge", value),
    }
}

#[function_component(BoostsView)]
pub fn boosts_view(props: &BoostsViewProps) -> Html {
    let show_reset_confirm = use_state(|| false);
    let eco = (*props.economy).clone();

    let cards: Html = TRACK_DEFS
        .iter()
        .map(|def| {
            let lvl = eco.level(def.id);
            let step = eco.next_step(def.id);
            let at_max = step.is_none();
            let affordable = step.map(|s| eco.score >= s.price).unwrap_or(false);
            let disabled = at_max || !affordable;
            let next_line = match step {
                Some(s) => format!("Next: {}", benefit_text(def.id, s.benefit)),
                None => String::from("Fully upgraded"),
            };
            let btn_label = match step {
                Some(s) => format!("Buy ({})", format_with_commas(s.price)),
                None => String::from("MAX"),
            };
            let bar = (lvl as f64 / def.max_level as f64) * 100.0;
            let idc = def.id;
            let onclick_cb = {
                let purchase = props.purchase.clone();
                Callback::from(move |_: MouseEvent| purchase.emit(idc))
            };
            html! {
                <div style="position:relative; width:230px; border:2px solid #374151; border-radius:14px; padding:12px 14px 48px 14px; background:#111821;">
                    <div style="font-weight:700; font-size:15px; letter-spacing:.5px;">{ def.name }</div>
                    <div style="font-size:12px; opacity:0.85; margin-top:4px;">{ stat_text(def.id, eco.stat(def.id)) }</div>
                    <div style="font-size:12px; opacity:0.85;">{ next_line }</div>
                    <div style="font-size:11px; opacity:0.7; margin-top:4px;">{ format!("{}/{}", lvl, def.max_level) }</div>
                    <button
                        disabled={disabled}
                        style="position:absolute; left:12px; right:12px; bottom:12px; height:28px; font-size:12px; border-radius:8px; border:1px solid #30363d; background:#1c2128; color:#fff;"
                        onclick={onclick_cb}
                    >
                        { btn_label }
                    </button>
                    <div style="position:absolute; left:0; bottom:0; height:6px; width:100%; background:#161b22; border-radius:0 0 14px 14px; overflow:hidden;">
                        <div style={format!("height:100%; width:{:.1}%; background:#3fb950;", bar)}></div>
                    </div>
                </div>
            }
        })
        .collect();

    let open_reset = {
        let show_reset_confirm = show_reset_confirm.clone();
        Callback::from(move |_: MouseEvent| show_reset_confirm.set(true))
    };
    let cancel_reset = {
        let show_reset_confirm = show_reset_confirm.clone();
        Callback::from(move |_: MouseEvent| show_reset_confirm.set(false))
    };
    let confirm_reset = {
        let show_reset_confirm = show_reset_confirm.clone();
        let reset = props.reset_progress.clone();
        Callback::from(move |_: MouseEvent| {
            reset.emit(());
            show_reset_confirm.set(false);
        })
    };

    let reset_modal = if *show_reset_confirm {
        html! {
            <div style="position:absolute; inset:0; background:rgba(0,0,0,0.55); display:flex; align-items:center; justify-content:center; z-index:50;">
                <div style="width:360px; max-width:90%; background:#161b22; border:1px solid #30363d; border-radius:12px; padding:18px 20px 16px 20px; display:flex; flex-direction:column; gap:14px;">
                    <div style="font-size:16px; font-weight:600;">{"Reset Progress"}</div>
                    <div style="font-size:13px; line-height:1.4; opacity:0.85;">
                        {"This will erase your coins, rank, and all boosts. This cannot be undone. Are you sure you want to reset?"}
                    </div>
                    <div style="display:flex; gap:10px; justify-content:flex-end;">
                        <button onclick={cancel_reset} style="min-width:90px;">{"Cancel"}</button>
                        <button onclick={confirm_reset} style="min-width:110px; background:#b62324; border:1px solid #da3633;">{"Confirm Reset"}</button>
                    </div>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; background:#0d1117; color:#c9d1d9; overflow:hidden;">
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.95); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:180px; display:flex; flex-direction:column; gap:6px; z-index:20;">
                <div style="font-weight:600;">{ format!("Coins: {}", format_with_commas(eco.score)) }</div>
                <button onclick={{ let cb = props.to_coin.clone(); Callback::from(move |_| cb.emit(())) }}>{"Back"}</button>
                <button onclick={open_reset} style="background:#3b1d1d; border:1px solid #5d2d2d;">{"Reset Progress"}</button>
            </div>
            <div style="display:flex; gap:16px; justify-content:center; align-items:flex-start; padding-top:90px; flex-wrap:wrap;">
                { cards }
            </div>
            { reset_modal }
        </div>
    }
}
