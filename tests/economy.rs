// tests/economy.rs — native tests driving the economy reducer directly.
use std::rc::Rc;

use yew::Reducible;
use yew_coin_tap::model::{
    BASE_MAX_ENERGY, EconomyAction, EconomySnapshot, EconomyState, MAX_TRACK_LEVEL, Rank,
    TRACK_DEFS, TrackId,
};

fn apply(state: Rc<EconomyState>, action: EconomyAction) -> Rc<EconomyState> {
    state.reduce(action)
}

fn tap(state: Rc<EconomyState>) -> Rc<EconomyState> {
    apply(state, EconomyAction::Tap { x: 0.0, y: 0.0 })
}

fn hydrated(snap: EconomySnapshot) -> Rc<EconomyState> {
    apply(Rc::new(EconomyState::new()), EconomyAction::Hydrate(snap))
}

/* ──────────────────────────────────────────────────────────────────────────
Tap handler
────────────────────────────────────────────────────────────────────────── */

#[test]
fn five_taps_drain_five_energy_then_sixth_is_dropped() {
    // multiplier = 1, energy = 5: five taps land, the sixth is a no-op.
    let mut s = hydrated(EconomySnapshot {
        energy: Some(5),
        max_energy: Some(5),
        ..Default::default()
    });
    for _ in 0..5 {
        s = tap(s);
    }
    assert_eq!(s.score, 5);
    assert_eq!(s.energy, 0);

    let after = tap(s.clone());
    assert!(Rc::ptr_eq(&s, &after), "rejected tap must leave state untouched");
}

#[test]
fn n_taps_of_value_v_add_n_times_v() {
    let mut s = hydrated(EconomySnapshot {
        multiplier: Some(4),
        ..Default::default()
    });
    for _ in 0..10 {
        s = tap(s);
    }
    assert_eq!(s.score, 40);
    assert_eq!(s.energy, BASE_MAX_ENERGY - 40);
}

#[test]
fn tap_costs_exactly_the_multiplier() {
    let s = hydrated(EconomySnapshot {
        multiplier: Some(3),
        energy: Some(2),
        max_energy: Some(10),
        ..Default::default()
    });
    // 2 energy cannot cover a 3-energy tap.
    let after = tap(s.clone());
    assert!(Rc::ptr_eq(&s, &after));

    let s = hydrated(EconomySnapshot {
        multiplier: Some(3),
        energy: Some(3),
        max_energy: Some(10),
        ..Default::default()
    });
    let s = tap(s);
    assert_eq!(s.energy, 0);
    assert_eq!(s.score, 3);
}

#[test]
fn successful_tap_spawns_a_popup() {
    let s = tap(Rc::new(EconomyState::new()));
    assert_eq!(s.popups.len(), 1);
    assert_eq!(s.popups[0].amount, 1);

    // Rejected taps spawn nothing.
    let empty = hydrated(EconomySnapshot {
        energy: Some(0),
        ..Default::default()
    });
    let after = tap(empty);
    assert!(after.popups.is_empty());
}

/* ──────────────────────────────────────────────────────────────────────────
Recharge loop
────────────────────────────────────────────────────────────────────────── */

#[test]
fn recharge_clamps_to_max_energy() {
    let mut s = hydrated(EconomySnapshot {
        energy: Some(0),
        max_energy: Some(10),
        recharge_rate: Some(7),
        ..Default::default()
    });
    s = apply(s, EconomyAction::RechargeTick);
    assert_eq!(s.energy, 7);
    s = apply(s, EconomyAction::RechargeTick);
    assert_eq!(s.energy, 10);

    // Already full: the tick is a no-op.
    let after = apply(s.clone(), EconomyAction::RechargeTick);
    assert!(Rc::ptr_eq(&s, &after));
}

#[test]
fn energy_never_exceeds_max_under_any_tick_sequence() {
    let mut s = hydrated(EconomySnapshot {
        energy: Some(0),
        max_energy: Some(37),
        recharge_rate: Some(5),
        multiplier: Some(2),
        ..Default::default()
    });
    for i in 0..500 {
        s = if i % 3 == 0 {
            tap(s)
        } else {
            apply(s, EconomyAction::RechargeTick)
        };
        assert!(s.energy <= s.max_energy);
    }
}

/* ──────────────────────────────────────────────────────────────────────────
Upgrade resolver
────────────────────────────────────────────────────────────────────────── */

#[test]
fn purchase_below_price_is_dropped() {
    let s = hydrated(EconomySnapshot {
        score: Some(499),
        ..Default::default()
    });
    let after = apply(s.clone(), EconomyAction::Purchase { track: TrackId::Multitap });
    assert!(Rc::ptr_eq(&s, &after));
}

#[test]
fn purchase_debits_exactly_the_price_and_applies_the_benefit() {
    for def in TRACK_DEFS.iter() {
        let s = hydrated(EconomySnapshot {
            score: Some(10_000),
            granted_bonuses: Some(vec![]),
            ..Default::default()
        });
        let before_stat = s.stat(def.id);
        let step = s.next_step(def.id).unwrap();
        let after = apply(s.clone(), EconomyAction::Purchase { track: def.id });
        assert_eq!(after.score, s.score - step.price);
        assert_eq!(after.level(def.id), 2);
        assert_eq!(after.stat(def.id), before_stat + step.benefit);
    }
}

#[test]
fn purchase_at_exact_price_succeeds() {
    let s = hydrated(EconomySnapshot {
        score: Some(500),
        ..Default::default()
    });
    let after = apply(s, EconomyAction::Purchase { track: TrackId::Multitap });
    assert_eq!(after.score, 0);
    assert_eq!(after.multitap_level, 2);
    assert_eq!(after.multiplier, 2);
}

#[test]
fn tracks_cap_at_level_ten() {
    let mut s = hydrated(EconomySnapshot {
        score: Some(1_000_000),
        granted_bonuses: Some(vec![]),
        ..Default::default()
    });
    for _ in 0..20 {
        s = apply(s, EconomyAction::Purchase { track: TrackId::EnergyLimit });
    }
    assert_eq!(s.energy_level, MAX_TRACK_LEVEL);
    assert_eq!(s.max_energy, BASE_MAX_ENERGY + 9 * 500);
    assert!(s.next_step(TrackId::EnergyLimit).is_none());
    assert!(!s.can_purchase(TrackId::EnergyLimit));

    let after = apply(s.clone(), EconomyAction::Purchase { track: TrackId::EnergyLimit });
    assert!(Rc::ptr_eq(&s, &after));
}

#[test]
fn track_tables_are_nine_increasing_steps() {
    for def in TRACK_DEFS.iter() {
        assert_eq!(def.steps.len(), (def.max_level - 1) as usize);
        for (i, step) in def.steps.iter().enumerate() {
            assert_eq!(step.level as usize, i + 2);
            if i > 0 {
                assert!(step.price > def.steps[i - 1].price);
            }
        }
    }
}

/* ──────────────────────────────────────────────────────────────────────────
Rank evaluator
────────────────────────────────────────────────────────────────────────── */

#[test]
fn rank_bonus_pays_once_even_when_score_recrosses() {
    let mut s = hydrated(EconomySnapshot {
        score: Some(999),
        granted_bonuses: Some(vec![]),
        ..Default::default()
    });
    s = tap(s); // 1_000 crossed: +100 bonus
    assert_eq!(s.score, 1_100);
    assert_eq!(s.rank, Rank::Bronze);
    assert_eq!(s.granted_bonuses, vec![Rank::Bronze]);

    // Spend back below the threshold, then re-cross it by tapping.
    s = apply(s, EconomyAction::Purchase { track: TrackId::Multitap });
    assert_eq!(s.score, 600);
    s = tap(s);
    assert_eq!(s.score, 602); // multiplier is 2 now; no second bonus
    assert_eq!(s.granted_bonuses.len(), 1);
}

#[test]
fn bonus_cascade_settles_every_tier_it_crosses() {
    let s = hydrated(EconomySnapshot {
        score: Some(99_999),
        granted_bonuses: Some(vec![]),
        ..Default::default()
    });
    let s = tap(s);
    // 100_000 reached: Diamond +10_000, then Platinum, Gold, Silver, Bronze
    // settle in turn since each payout keeps the score above their thresholds.
    assert_eq!(s.score, 100_000 + 10_000 + 5_000 + 1_000 + 500 + 100);
    assert_eq!(s.rank, Rank::Diamond);
    assert_eq!(s.granted_bonuses.len(), 5);
}

#[test]
fn rank_never_goes_down() {
    let mut s = hydrated(EconomySnapshot {
        score: Some(4_999),
        granted_bonuses: Some(vec![Rank::Bronze]),
        ..Default::default()
    });
    s = tap(s); // 5_000: Silver
    assert_eq!(s.rank, Rank::Silver);
    // 5_500 - 500 - 1_000 - 1_500 - 2_000 = 500; later buys are unaffordable.
    for _ in 0..8 {
        s = apply(s, EconomyAction::Purchase { track: TrackId::Multitap });
    }
    assert_eq!(s.score, 500);
    assert_eq!(s.rank, Rank::Silver);
}

/* ──────────────────────────────────────────────────────────────────────────
Popup aging
────────────────────────────────────────────────────────────────────────── */

#[test]
fn popups_age_out_after_their_lifetime() {
    let s = tap(Rc::new(EconomyState::new()));
    let s = apply(s, EconomyAction::PopupTick { dt: 0.5 });
    assert_eq!(s.popups.len(), 1);
    assert!(s.popups[0].ttl < 1.0);
    let s = apply(s, EconomyAction::PopupTick { dt: 0.6 });
    assert!(s.popups.is_empty());

    // No live popups: aging is a no-op.
    let after = apply(s.clone(), EconomyAction::PopupTick { dt: 0.1 });
    assert!(Rc::ptr_eq(&s, &after));
}

/* ──────────────────────────────────────────────────────────────────────────
Hydration & reset
────────────────────────────────────────────────────────────────────────── */

#[test]
fn hydration_clamps_out_of_range_fields() {
    let s = hydrated(EconomySnapshot {
        energy: Some(9_999),
        max_energy: Some(500),
        multitap_level: Some(0),
        energy_level: Some(99),
        ..Default::default()
    });
    assert_eq!(s.energy, 500);
    assert_eq!(s.multitap_level, 1);
    assert_eq!(s.energy_level, MAX_TRACK_LEVEL);
}

#[test]
fn hydration_defaults_missing_fields() {
    let s = hydrated(EconomySnapshot::default());
    assert_eq!(*s, EconomyState::new());
}

#[test]
fn legacy_save_without_granted_set_derives_it() {
    // Score still clears Bronze and Silver; rank proves nothing extra.
    let s = hydrated(EconomySnapshot {
        score: Some(6_000),
        rank: Some(Rank::Silver),
        ..Default::default()
    });
    assert_eq!(s.granted_bonuses, vec![Rank::Bronze, Rank::Silver]);

    // Rank proves Gold was crossed even though purchases drained the score.
    let s = hydrated(EconomySnapshot {
        score: Some(800),
        rank: Some(Rank::Gold),
        ..Default::default()
    });
    assert_eq!(
        s.granted_bonuses,
        vec![Rank::Bronze, Rank::Silver, Rank::Gold]
    );

    // A fresh-ish Bronze save below the first threshold has paid nothing.
    let s = hydrated(EconomySnapshot {
        score: Some(500),
        rank: Some(Rank::Bronze),
        ..Default::default()
    });
    assert!(s.granted_bonuses.is_empty());
}

#[test]
fn reset_returns_to_the_pristine_state() {
    let mut s = hydrated(EconomySnapshot {
        score: Some(42_000),
        rank: Some(Rank::Gold),
        multitap_level: Some(5),
        multiplier: Some(5),
        ..Default::default()
    });
    s = tap(s);
    s = apply(s, EconomyAction::Reset);
    assert_eq!(*s, EconomyState::new());
}
