//! Coin Tap — a tap-to-earn clicker.
//!
//! The economy itself (taps, energy, ranks, upgrade tracks) lives in
//! [`model`] as a pure reducer so it can be exercised by native tests; the
//! browser-facing pieces (localStorage persistence, yew components) sit on
//! top of it.

pub mod components;
pub mod model;
pub mod storage;
pub mod util;
