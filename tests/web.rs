#![cfg(target_arch = "wasm32")]

use matchplay_core::{MatchEngine, Outcome, RoundResolution};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn language_round_plays_through_the_json_surface() {
    let mut engine =
        MatchEngine::new(None, Some(7)).expect("constructor should accept a seed");

    let started: RoundResolution =
        serde_json::from_str(&engine.start_language_round().expect("round should start"))
            .expect("resolution should parse");
    assert_eq!(started.state.pool.len(), 5);
    assert!(started.outcome.is_none());

    for item in &started.state.pool {
        engine.select_left(item.id).expect("selection should resolve");
        engine.select_right(item.id).expect("selection should resolve");
    }

    let evaluated: RoundResolution =
        serde_json::from_str(&engine.evaluate().expect("evaluation should resolve"))
            .expect("resolution should parse");
    assert_eq!(evaluated.outcome, Some(Outcome::Correct));
    assert_eq!(evaluated.state.score, 1);

    let acknowledged: RoundResolution =
        serde_json::from_str(&engine.acknowledge().expect("acknowledge should resolve"))
            .expect("resolution should parse");
    assert!(acknowledged.state.pairings.is_empty());
    assert_eq!(acknowledged.state.score, 1);
}

#[wasm_bindgen_test]
fn unknown_topics_are_rejected() {
    let mut engine = MatchEngine::new(None, None).expect("constructor should succeed");
    assert!(engine.start_topic_round("algebra").is_err());
    assert!(engine.start_topic_round("animals").is_ok());
}
