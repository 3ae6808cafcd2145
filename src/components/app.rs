use super::{boosts_view::BoostsView, coin_view::CoinView};
use crate::model::{
    EconomyAction, EconomyState, POPUP_INTERVAL_MS, RECHARGE_INTERVAL_MS, Rank, TrackId,
};
use crate::storage;
use crate::util::{clog, query_username};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(PartialEq, Clone)]
enum View {
    Coin,
    Boosts,
}

/// Identity context: the display name handed to us by the embedding page
/// (so components can show it without prop drilling).
#[derive(Clone, PartialEq)]
pub struct UserContext {
    pub username: String,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Coin);
    let economy = use_reducer(EconomyState::new);
    let username = use_state(|| query_username().unwrap_or_else(|| String::from("guest")));
    let last_rank = use_mut_ref(|| Rank::Bronze);

    // Rehydrate persisted progress once on mount.
    {
        let economy = economy.clone();
        use_effect_with((), move |_| {
            let snapshot = storage::load_snapshot();
            if snapshot.score.is_some() {
                clog("restoring saved progress");
            }
            economy.dispatch(EconomyAction::Hydrate(snapshot));
            || ()
        });
    }

    // Recharge ticker (1s) + popup aging ticker.
    {
        let economy = economy.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let recharge = {
                let economy = economy.clone();
                Closure::wrap(
                    Box::new(move || economy.dispatch(EconomyAction::RechargeTick))
                        as Box<dyn FnMut()>,
                )
            };
            let recharge_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    recharge.as_ref().unchecked_ref(),
                    RECHARGE_INTERVAL_MS,
                )
                .unwrap();
            let popup_tick = {
                let economy = economy.clone();
                let dt = POPUP_INTERVAL_MS as f64 / 1000.0;
                Closure::wrap(Box::new(move || {
                    economy.dispatch(EconomyAction::PopupTick { dt })
                }) as Box<dyn FnMut()>)
            };
            let popup_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    popup_tick.as_ref().unchecked_ref(),
                    POPUP_INTERVAL_MS,
                )
                .unwrap();
            move || {
                window.clear_interval_with_handle(recharge_id);
                window.clear_interval_with_handle(popup_id);
                drop(recharge);
                drop(popup_tick);
            }
        });
    }

    // Persist score and rank standing.
    {
        let economy = economy.clone();
        use_effect_with(
            (economy.score, economy.rank, economy.granted_bonuses.len()),
            move |_| {
                storage::set_u64(storage::KEY_TOTAL_CLICKS, economy.score);
                storage::set_str(storage::KEY_RANK, economy.rank.key());
                storage::save_granted_bonuses(&economy.granted_bonuses);
                || ()
            },
        );
    }
    // Persist the energy pool.
    {
        let economy = economy.clone();
        use_effect_with(
            (economy.energy, economy.max_energy, economy.recharge_rate),
            move |_| {
                storage::set_u64(storage::KEY_CLICK_LIMIT, economy.energy);
                storage::set_u64(storage::KEY_MAX_CLICKS, economy.max_energy);
                storage::set_u64(storage::KEY_PLUS_LIMIT_VALUE, economy.recharge_rate);
                || ()
            },
        );
    }
    // Persist upgrade levels.
    {
        let economy = economy.clone();
        use_effect_with(
            (
                economy.multiplier,
                economy.multitap_level,
                economy.energy_level,
                economy.speed_level,
            ),
            move |_| {
                storage::set_u64(storage::KEY_MULTITAP, economy.multiplier);
                storage::set_u8(storage::KEY_MULTITAP_LEVEL, economy.multitap_level);
                storage::set_u8(storage::KEY_ENERGY_LEVEL, economy.energy_level);
                storage::set_u8(storage::KEY_SPEED_LEVEL, economy.speed_level);
                || ()
            },
        );
    }

    // Log rank changes.
    {
        let last_rank = last_rank.clone();
        use_effect_with(economy.rank, move |rank| {
            let mut prev = last_rank.borrow_mut();
            if *prev != *rank {
                clog(&format!("rank: {} -> {}", prev.key(), rank.key()));
            }
            *prev = *rank;
            || ()
        });
    }

    let to_coin = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Coin))
    };
    let to_boosts = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Boosts))
    };

    let purchase = {
        let economy = economy.clone();
        Callback::from(move |track: TrackId| {
            economy.dispatch(EconomyAction::Purchase { track });
        })
    };
    // Affordability and level checks live in the reducer; an invalid buy is
    // simply dropped there.

    let reset_progress = {
        let economy = economy.clone();
        Callback::from(move |_: ()| {
            storage::clear_save();
            economy.dispatch(EconomyAction::Reset);
        })
    };

    let user_ctx = UserContext {
        username: (*username).clone(),
    };

    let content = match *view {
        View::Coin => html! { <CoinView
            economy={economy.clone()}
            to_boosts={to_boosts.clone()}
        /> },
        View::Boosts => html! { <BoostsView
            economy={economy.clone()}
            to_coin={to_coin.clone()}
            purchase={purchase.clone()}
            reset_progress={reset_progress.clone()}
        /> },
    };

    html! { <ContextProvider<UserContext> context={user_ctx}>{ content }</ContextProvider<UserContext>> }
}
