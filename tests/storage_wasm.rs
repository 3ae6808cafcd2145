// Browser-only storage tests; compiled away under `cargo test` on the host.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use yew_coin_tap::model::Rank;
use yew_coin_tap::storage;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn snapshot_round_trip() {
    storage::clear_save();

    storage::set_u64(storage::KEY_TOTAL_CLICKS, 1_234);
    storage::set_str(storage::KEY_RANK, Rank::Silver.key());
    storage::set_u64(storage::KEY_CLICK_LIMIT, 42);
    storage::save_granted_bonuses(&[Rank::Bronze, Rank::Silver]);

    let snap = storage::load_snapshot();
    assert_eq!(snap.score, Some(1_234));
    assert_eq!(snap.rank, Some(Rank::Silver));
    assert_eq!(snap.energy, Some(42));
    assert_eq!(snap.granted_bonuses, Some(vec![Rank::Bronze, Rank::Silver]));
    // Keys never written stay absent.
    assert_eq!(snap.max_energy, None);

    storage::clear_save();
    assert_eq!(storage::load_snapshot().score, None);
}
