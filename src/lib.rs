pub mod game;

use serde_wasm_bindgen::{from_value, to_value};
use std::str::FromStr;
use wasm_bindgen::prelude::*;

pub use game::{
    games, language_pairs, topic_items, GameInfo, IntegrityError, ItemId, MatchItem, Outcome,
    Pairing, RoundEngine, RoundEvent, RoundMode, RoundResolution, RoundState, RuleError, Side,
    Topic,
};

/// Round sizes used by the two shipped games.
const MATCHING_ROUND_SIZE: usize = 3;
const LANGUAGE_ROUND_SIZE: usize = 5;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn start() {
    set_panic_hook();
    web_sys::console::log_1(&"matchplay core initialised".into());
}

fn to_js_error(error: RuleError) -> JsValue {
    to_value(&error).unwrap_or_else(|serialize_err| JsValue::from_str(&serialize_err.to_string()))
}

fn serde_to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn parse_mode(mode: &str) -> Result<RoundMode, JsValue> {
    RoundMode::from_str(mode)
        .map_err(|_| JsValue::from_str(&format!("unknown round mode: {mode}")))
}

fn parse_topic(topic: &str) -> Result<Topic, JsValue> {
    Topic::from_str(topic).map_err(|_| JsValue::from_str(&format!("unknown topic: {topic}")))
}

fn resolution_from_events(state: &RoundState, events: Vec<RoundEvent>) -> RoundResolution {
    RoundResolution::new(state.clone(), events)
}

fn make_resolution_json(resolution: RoundResolution) -> Result<String, JsValue> {
    serde_json::to_string(&resolution).map_err(serde_to_js_error)
}

/// Stateful engine wrapper for view shells that keep the round state on
/// the Rust side. Every mutating call answers with a JSON
/// `RoundResolution { state, events, outcome? }`.
#[wasm_bindgen]
pub struct MatchEngine {
    state: RoundState,
    engine: RoundEngine,
    catalog: Vec<MatchItem>,
}

#[wasm_bindgen]
impl MatchEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(initial_state_json: Option<String>, seed: Option<u64>) -> Result<MatchEngine, JsValue> {
        let state = if let Some(json) = initial_state_json {
            serde_json::from_str(&json).map_err(serde_to_js_error)?
        } else {
            RoundState::default()
        };
        Ok(MatchEngine {
            state,
            engine: engine_for(seed),
            catalog: Vec::new(),
        })
    }

    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state).map_err(serde_to_js_error)
    }

    pub fn set_state_json(&mut self, json: &str) -> Result<(), JsValue> {
        let state: RoundState = serde_json::from_str(json).map_err(serde_to_js_error)?;
        self.state = state;
        Ok(())
    }

    /// Starts an image/word round for one topic of the matching game.
    pub fn start_topic_round(&mut self, topic: &str) -> Result<String, JsValue> {
        let topic = parse_topic(topic)?;
        self.catalog = topic_items(topic).to_vec();
        self.begin(MATCHING_ROUND_SIZE, RoundMode::SinglePick)
    }

    /// Starts a French–English word-pairing round.
    pub fn start_language_round(&mut self) -> Result<String, JsValue> {
        self.catalog = language_pairs().to_vec();
        self.begin(LANGUAGE_ROUND_SIZE, RoundMode::MultiPair)
    }

    /// Starts a round over a caller-supplied catalog.
    pub fn start_round_json(
        &mut self,
        catalog_json: &str,
        size: usize,
        mode: &str,
    ) -> Result<String, JsValue> {
        let mode = parse_mode(mode)?;
        self.catalog = serde_json::from_str(catalog_json).map_err(serde_to_js_error)?;
        self.begin(size, mode)
    }

    pub fn select_left(&mut self, id: ItemId) -> Result<String, JsValue> {
        let events = self.engine.select_left(&mut self.state, id);
        make_resolution_json(resolution_from_events(&self.state, events))
    }

    pub fn select_right(&mut self, id: ItemId) -> Result<String, JsValue> {
        let events = self.engine.select_right(&mut self.state, id);
        make_resolution_json(resolution_from_events(&self.state, events))
    }

    pub fn evaluate(&mut self) -> Result<String, JsValue> {
        let events = self.engine.evaluate(&mut self.state);
        make_resolution_json(resolution_from_events(&self.state, events))
    }

    pub fn acknowledge(&mut self) -> Result<String, JsValue> {
        let events = self
            .engine
            .acknowledge_result(&mut self.state, &self.catalog)
            .map_err(to_js_error)?;
        make_resolution_json(resolution_from_events(&self.state, events))
    }

    fn begin(&mut self, size: usize, mode: RoundMode) -> Result<String, JsValue> {
        let events = self
            .engine
            .start_round(&mut self.state, &self.catalog, size, mode)
            .map_err(to_js_error)?;
        make_resolution_json(resolution_from_events(&self.state, events))
    }
}

fn engine_for(seed: Option<u64>) -> RoundEngine {
    match seed {
        Some(seed) => RoundEngine::with_seed(seed),
        None => RoundEngine::new(),
    }
}

/// Empty round state, for hosts that thread state through the stateless
/// functions below.
#[wasm_bindgen(js_name = "createRoundState")]
pub fn create_round_state() -> Result<JsValue, JsValue> {
    to_value(&RoundState::default()).map_err(JsValue::from)
}

/// Deep copy of a round state.
#[wasm_bindgen(js_name = "cloneRoundState")]
pub fn clone_round_state(state: JsValue) -> Result<JsValue, JsValue> {
    let state: RoundState = from_value(state).map_err(JsValue::from)?;
    let cloned = state.clone();
    to_value(&cloned).map_err(JsValue::from)
}

/// The mini-game registry the menu screen renders.
#[wasm_bindgen(js_name = "listGames")]
pub fn list_games() -> Result<JsValue, JsValue> {
    to_value(games()).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = "topicCatalog")]
pub fn topic_catalog(topic: &str) -> Result<JsValue, JsValue> {
    let topic = parse_topic(topic)?;
    to_value(topic_items(topic)).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = "languageCatalog")]
pub fn language_catalog() -> Result<JsValue, JsValue> {
    to_value(language_pairs()).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = "startRound")]
pub fn start_round(
    state: JsValue,
    catalog: JsValue,
    size: usize,
    mode: &str,
    seed: Option<u64>,
) -> Result<JsValue, JsValue> {
    let mut state: RoundState = from_value(state).map_err(JsValue::from)?;
    let catalog: Vec<MatchItem> = from_value(catalog).map_err(JsValue::from)?;
    let mode = parse_mode(mode)?;
    let mut engine = engine_for(seed);
    match engine.start_round(&mut state, &catalog, size, mode) {
        Ok(events) => to_value(&RoundResolution::new(state, events)).map_err(JsValue::from),
        Err(error) => Err(to_js_error(error)),
    }
}

#[wasm_bindgen(js_name = "selectLeft")]
pub fn select_left(state: JsValue, id: ItemId) -> Result<JsValue, JsValue> {
    let mut state: RoundState = from_value(state).map_err(JsValue::from)?;
    let mut engine = RoundEngine::new();
    let events = engine.select_left(&mut state, id);
    to_value(&RoundResolution::new(state, events)).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = "selectRight")]
pub fn select_right(state: JsValue, id: ItemId) -> Result<JsValue, JsValue> {
    let mut state: RoundState = from_value(state).map_err(JsValue::from)?;
    let mut engine = RoundEngine::new();
    let events = engine.select_right(&mut state, id);
    to_value(&RoundResolution::new(state, events)).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = "confirmPairIfReady")]
pub fn confirm_pair_if_ready(state: JsValue) -> Result<JsValue, JsValue> {
    let mut state: RoundState = from_value(state).map_err(JsValue::from)?;
    let mut engine = RoundEngine::new();
    let events = engine.confirm_pair_if_ready(&mut state);
    to_value(&RoundResolution::new(state, events)).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = "evaluateRound")]
pub fn evaluate_round(state: JsValue) -> Result<JsValue, JsValue> {
    let mut state: RoundState = from_value(state).map_err(JsValue::from)?;
    let mut engine = RoundEngine::new();
    let events = engine.evaluate(&mut state);
    to_value(&RoundResolution::new(state, events)).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = "acknowledgeResult")]
pub fn acknowledge_result(
    state: JsValue,
    catalog: JsValue,
    seed: Option<u64>,
) -> Result<JsValue, JsValue> {
    let mut state: RoundState = from_value(state).map_err(JsValue::from)?;
    let catalog: Vec<MatchItem> = from_value(catalog).map_err(JsValue::from)?;
    let mut engine = engine_for(seed);
    match engine.acknowledge_result(&mut state, &catalog) {
        Ok(events) => to_value(&RoundResolution::new(state, events)).map_err(JsValue::from),
        Err(error) => Err(to_js_error(error)),
    }
}

#[wasm_bindgen(js_name = "validateState")]
pub fn validate_state(state: JsValue) -> Result<(), JsValue> {
    let state: RoundState = from_value(state).map_err(JsValue::from)?;
    RoundEngine::validate(&state).map_err(to_js_error)
}

#[cfg(feature = "console_error_panic_hook")]
fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

#[cfg(not(feature = "console_error_panic_hook"))]
fn set_panic_hook() {}
