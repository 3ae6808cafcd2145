//! Core data model for Coin Tap.
//!
//! Everything here is pure Rust: the reducer never touches browser APIs, so
//! the whole economy can be driven directly in native tests. Persistence and
//! timers live in `storage` and the component layer.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Stats at track level 1 (a fresh save).
pub const BASE_MULTIPLIER: u64 = 1;
pub const BASE_MAX_ENERGY: u64 = 500;
pub const BASE_RECHARGE_RATE: u64 = 1;

/// Highest reachable level on any upgrade track.
pub const MAX_TRACK_LEVEL: u8 = 10;

/// How long a floating score popup stays alive, in seconds.
pub const POPUP_LIFETIME_SECS: f64 = 1.0;

/// Wall-clock cadence of the energy recharge tick.
pub const RECHARGE_INTERVAL_MS: i32 = 1_000;

/// Cadence of popup aging. Popups are plain DOM nodes, so this can be much
/// coarser than a canvas frame tick.
pub const POPUP_INTERVAL_MS: i32 = 100;

// ---------------- Ranks -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl Rank {
    pub fn key(self) -> &'static str {
        match self {
            Rank::Bronze => "Bronze",
            Rank::Silver => "Silver",
            Rank::Gold => "Gold",
            Rank::Platinum => "Platinum",
            Rank::Diamond => "Diamond",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Bronze" => Some(Rank::Bronze),
            "Silver" => Some(Rank::Silver),
            "Gold" => Some(Rank::Gold),
            "Platinum" => Some(Rank::Platinum),
            "Diamond" => Some(Rank::Diamond),
            _ => None,
        }
    }
}

pub struct RankTier {
    pub rank: Rank,
    /// Cumulative score that unlocks the tier.
    pub threshold: u64,
    /// One-time score grant when the tier is first reached.
    pub bonus: u64,
}

pub const RANK_TIERS: &[RankTier] = &[
    RankTier { rank: Rank::Bronze, threshold: 1_000, bonus: 100 },
    RankTier { rank: Rank::Silver, threshold: 5_000, bonus: 500 },
    RankTier { rank: Rank::Gold, threshold: 10_000, bonus: 1_000 },
    RankTier { rank: Rank::Platinum, threshold: 50_000, bonus: 5_000 },
    RankTier { rank: Rank::Diamond, threshold: 100_000, bonus: 10_000 },
];

// ---------------- Upgrade tracks -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackId {
    Multitap,
    EnergyLimit,
    RechargeSpeed,
}

/// One purchasable step of a track: the level it buys, what it costs, and
/// how much it adds to the track's stat.
pub struct TrackStep {
    pub level: u8,
    pub price: u64,
    pub benefit: u64,
}

pub struct TrackDef {
    pub id: TrackId,
    pub name: &'static str,
    pub max_level: u8,
    pub steps: &'static [TrackStep],
}

const MULTITAP_STEPS: &[TrackStep] = &[
    TrackStep { level: 2, price: 500, benefit: 1 },
    TrackStep { level: 3, price: 1_000, benefit: 1 },
    TrackStep { level: 4, price: 1_500, benefit: 1 },
    TrackStep { level: 5, price: 2_000, benefit: 1 },
    TrackStep { level: 6, price: 2_500, benefit: 1 },
    TrackStep { level: 7, price: 3_000, benefit: 1 },
    TrackStep { level: 8, price: 3_500, benefit: 1 },
    TrackStep { level: 9, price: 4_000, benefit: 1 },
    TrackStep { level: 10, price: 4_500, benefit: 1 },
];

const ENERGY_LIMIT_STEPS: &[TrackStep] = &[
    TrackStep { level: 2, price: 400, benefit: 500 },
    TrackStep { level: 3, price: 800, benefit: 500 },
    TrackStep { level: 4, price: 1_200, benefit: 500 },
    TrackStep { level: 5, price: 1_600, benefit: 500 },
    TrackStep { level: 6, price: 2_000, benefit: 500 },
    TrackStep { level: 7, price: 2_400, benefit: 500 },
    TrackStep { level: 8, price: 2_800, benefit: 500 },
    TrackStep { level: 9, price: 3_200, benefit: 500 },
    TrackStep { level: 10, price: 3_600, benefit: 500 },
];

const RECHARGE_SPEED_STEPS: &[TrackStep] = &[
    TrackStep { level: 2, price: 600, benefit: 1 },
    TrackStep { level: 3, price: 1_200, benefit: 1 },
    TrackStep { level: 4, price: 1_800, benefit: 1 },
    TrackStep { level: 5, price: 2_400, benefit: 1 },
    TrackStep { level: 6, price: 3_000, benefit: 1 },
    TrackStep { level: 7, price: 3_600, benefit: 1 },
    TrackStep { level: 8, price: 4_200, benefit: 1 },
    TrackStep { level: 9, price: 4_800, benefit: 1 },
    TrackStep { level: 10, price: 5_400, benefit: 1 },
];

pub const TRACK_DEFS: [TrackDef; 3] = [
    TrackDef {
        id: TrackId::Multitap,
        name: "Multitap",
        max_level: MAX_TRACK_LEVEL,
        steps: MULTITAP_STEPS,
    },
    TrackDef {
        id: TrackId::EnergyLimit,
        name: "Energy Limit",
        max_level: MAX_TRACK_LEVEL,
        steps: ENERGY_LIMIT_STEPS,
    },
    TrackDef {
        id: TrackId::RechargeSpeed,
        name: "Recharging Speed",
        max_level: MAX_TRACK_LEVEL,
        steps: RECHARGE_SPEED_STEPS,
    },
];

pub fn track_def(id: TrackId) -> &'static TrackDef {
    &TRACK_DEFS[id as usize]
}

// ---------------- State -----------------

/// Floating score popup spawned by a successful tap. Ephemeral: aged out by
/// `PopupTick`, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct TapPopup {
    pub id: u64,
    pub amount: u64,
    /// Viewport coordinates of the tap.
    pub x: f64,
    pub y: f64,
    /// Remaining lifetime in seconds.
    pub ttl: f64,
}

/// Fields read back from durable storage at startup. Each field is optional
/// because every key is saved independently (best effort, no transaction).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EconomySnapshot {
    pub score: Option<u64>,
    pub rank: Option<Rank>,
    pub multiplier: Option<u64>,
    pub energy: Option<u64>,
    pub max_energy: Option<u64>,
    pub recharge_rate: Option<u64>,
    pub multitap_level: Option<u8>,
    pub energy_level: Option<u8>,
    pub speed_level: Option<u8>,
    pub granted_bonuses: Option<Vec<Rank>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EconomyState {
    pub score: u64,
    /// Invariant: `energy <= max_energy`.
    pub energy: u64,
    pub max_energy: u64,
    pub recharge_rate: u64,
    /// Score gained and energy spent by one tap.
    pub multiplier: u64,
    pub multitap_level: u8,
    pub energy_level: u8,
    pub speed_level: u8,
    /// Displayed tier; only ever moves up.
    pub rank: Rank,
    /// Tiers whose one-time bonus has already been paid out.
    pub granted_bonuses: Vec<Rank>,
    pub popups: Vec<TapPopup>,
    next_popup_id: u64,
}

impl EconomyState {
    pub fn new() -> Self {
        Self {
            score: 0,
            energy: BASE_MAX_ENERGY,
            max_energy: BASE_MAX_ENERGY,
            recharge_rate: BASE_RECHARGE_RATE,
            multiplier: BASE_MULTIPLIER,
            multitap_level: 1,
            energy_level: 1,
            speed_level: 1,
            rank: Rank::Bronze,
            granted_bonuses: Vec::new(),
            popups: Vec::new(),
            next_popup_id: 0,
        }
    }

    /// Rebuild state from persisted fields. Missing keys fall back to the
    /// defaults; out-of-range values are clamped rather than rejected so a
    /// partially written save still loads.
    pub fn from_snapshot(snap: EconomySnapshot) -> Self {
        let clamp_level = |l: Option<u8>| l.unwrap_or(1).clamp(1, MAX_TRACK_LEVEL);
        let max_energy = snap.max_energy.unwrap_or(BASE_MAX_ENERGY).max(1);
        let energy = snap.energy.unwrap_or(max_energy).min(max_energy);
        let rank = snap.rank.unwrap_or(Rank::Bronze);
        let score = snap.score.unwrap_or(0);
        // Saves written before the granted set was recorded: a tier counts as
        // paid when the score still clears its threshold, or when the stored
        // rank proves it was crossed. Bronze is displayed from the very first
        // session, so rank == Bronze alone proves nothing.
        let granted_bonuses = snap.granted_bonuses.unwrap_or_else(|| {
            RANK_TIERS
                .iter()
                .filter(|t| t.threshold <= score || (rank > Rank::Bronze && t.rank <= rank))
                .map(|t| t.rank)
                .collect()
        });
        Self {
            score,
            energy,
            max_energy,
            recharge_rate: snap.recharge_rate.unwrap_or(BASE_RECHARGE_RATE).max(1),
            multiplier: snap.multiplier.unwrap_or(BASE_MULTIPLIER).max(1),
            multitap_level: clamp_level(snap.multitap_level),
            energy_level: clamp_level(snap.energy_level),
            speed_level: clamp_level(snap.speed_level),
            rank,
            granted_bonuses,
            popups: Vec::new(),
            next_popup_id: 0,
        }
    }

    pub fn level(&self, id: TrackId) -> u8 {
        match id {
            TrackId::Multitap => self.multitap_level,
            TrackId::EnergyLimit => self.energy_level,
            TrackId::RechargeSpeed => self.speed_level,
        }
    }

    /// Current value of the stat a track improves.
    pub fn stat(&self, id: TrackId) -> u64 {
        match id {
            TrackId::Multitap => self.multiplier,
            TrackId::EnergyLimit => self.max_energy,
            TrackId::RechargeSpeed => self.recharge_rate,
        }
    }

    /// The next purchasable step of a track, or `None` at max level.
    pub fn next_step(&self, id: TrackId) -> Option<&'static TrackStep> {
        let def = track_def(id);
        let level = self.level(id);
        if level >= def.max_level {
            return None;
        }
        def.steps.get(level as usize - 1)
    }

    pub fn next_price(&self, id: TrackId) -> Option<u64> {
        self.next_step(id).map(|s| s.price)
    }

    pub fn can_purchase(&self, id: TrackId) -> bool {
        self.next_price(id).is_some_and(|p| self.score >= p)
    }

    /// Pay out every rank bonus the current score has earned. A bonus raises
    /// the score, which can cross the next threshold, so this runs to a
    /// fixpoint; each tier pays at most once per save.
    fn settle_ranks(&mut self) {
        loop {
            let due = RANK_TIERS
                .iter()
                .rev()
                .find(|t| self.score >= t.threshold && !self.granted_bonuses.contains(&t.rank));
            let Some(tier) = due else { break };
            self.score = self.score.saturating_add(tier.bonus);
            self.granted_bonuses.push(tier.rank);
            if tier.rank > self.rank {
                self.rank = tier.rank;
            }
        }
    }
}

impl Default for EconomyState {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------- Reducer & Actions -----------------

#[derive(Clone, Debug)]
pub enum EconomyAction {
    /// A tap at viewport coordinates (x, y).
    Tap { x: f64, y: f64 },
    /// One wall-clock recharge interval elapsed.
    RechargeTick,
    /// Age floating popups by `dt` seconds.
    PopupTick { dt: f64 },
    /// Buy the next level of a track.
    Purchase { track: TrackId },
    /// Restore persisted fields at startup.
    Hydrate(EconomySnapshot),
    /// Wipe progress back to a fresh state.
    Reset,
}

impl Reducible for EconomyState {
    type Action = EconomyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use EconomyAction::*;
        let mut new = (*self).clone();
        match action {
            Tap { x, y } => {
                // Not enough energy: the tap is dropped, not an error.
                if new.energy < new.multiplier {
                    return self;
                }
                new.energy -= new.multiplier;
                new.score = new.score.saturating_add(new.multiplier);
                let id = new.next_popup_id;
                new.next_popup_id += 1;
                new.popups.push(TapPopup {
                    id,
                    amount: new.multiplier,
                    x,
                    y,
                    ttl: POPUP_LIFETIME_SECS,
                });
                new.settle_ranks();
            }
            RechargeTick => {
                let refilled = new
                    .energy
                    .saturating_add(new.recharge_rate)
                    .min(new.max_energy);
                if refilled == new.energy {
                    return self;
                }
                new.energy = refilled;
            }
            PopupTick { dt } => {
                if new.popups.is_empty() {
                    return self;
                }
                for p in &mut new.popups {
                    p.ttl -= dt;
                }
                new.popups.retain(|p| p.ttl > 0.0);
            }
            Purchase { track } => {
                let Some(step) = new.next_step(track) else {
                    return self;
                };
                if new.score < step.price {
                    return self;
                }
                new.score -= step.price;
                match track {
                    TrackId::Multitap => {
                        new.multitap_level += 1;
                        new.multiplier += step.benefit;
                    }
                    TrackId::EnergyLimit => {
                        new.energy_level += 1;
                        new.max_energy += step.benefit;
                    }
                    TrackId::RechargeSpeed => {
                        new.speed_level += 1;
                        new.recharge_rate += step.benefit;
                    }
                }
                // Spending lowers score but never rank or granted bonuses.
            }
            Hydrate(snap) => {
                new = EconomyState::from_snapshot(snap);
            }
            Reset => {
                new = EconomyState::new();
            }
        }
        Rc::new(new)
    }
}
