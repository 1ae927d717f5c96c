//! # Booster simulator web app interface
//!
//! Defines the JSON contract between boostergen and the booster simulator
//! web app. The app fetches a set's card list from Scryfall, hands it across
//! with a booster type, and renders the returned pack in its table and
//! gallery views.
use crate::booster::RarityOutcome;
use crate::card::{Card, Rarity, SetCode};
use crate::catalog::Catalog;
use crate::data::PACK_SIMULATOR;
use crate::error::Error;
use crate::scryfall::ScryfallCard;

use rand::prelude::*;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

/// Input format expected from the web app
#[derive(Debug, Serialize, Deserialize)]
struct Input {
  /// The card list fetched for the selected set
  pub catalog: Vec<ScryfallCard>,
  /// The booster type to open, e.g. "setbooster"
  pub booster: String,
}

/// Output format expected by the web app
#[derive(Debug, Serialize, Deserialize)]
struct Output {
  pub cards: Vec<PackCard>,
  /// The first slot's resolved outcome, shown as the stats summary
  pub outcome: RarityOutcome,
  pub pack_size: usize,
}

/// The card projection the app's table and gallery views render
#[derive(Debug, Serialize, Deserialize)]
struct PackCard {
  pub name: String,
  pub type_line: String,
  pub rarity: Rarity,
  pub set: SetCode,
  pub usd_price: Option<String>,
  pub image_uri: String,
  pub edhrec_uri: String,
}

impl From<&Card> for PackCard {
  fn from(card: &Card) -> Self {
    Self {
      name: card.name.clone(),
      type_line: card.type_line.clone(),
      rarity: card.rarity,
      set: card.set.clone(),
      usd_price: card.usd_price.clone(),
      image_uri: card.image_uri.clone(),
      edhrec_uri: card.edhrec_uri.clone(),
    }
  }
}

/// Simulates opening one booster given input
/// Assumes that input deserializes into a valid `Input`, and returns a serialized `Output`
/// # Example
///
///  ```js
///  const input = { catalog: [...], booster: "setbooster" };
///  const output = require('boostergen').boostergen_run(input);
///  console.log(output);
///  ```
#[wasm_bindgen]
pub fn boostergen_run(input: &JsValue) -> JsValue {
  let input: Input = match input.into_serde() {
    Err(e) => {
      return JsValue::from_str(&format!("Error deserializing simulation inputs: {:#?}", e));
    }
    Ok(v) => v,
  };
  let result = match run_impl(&input) {
    Err(e) => {
      return JsValue::from_str(&format!("Error simulating pack: {}", e));
    }
    Ok(v) => v,
  };
  JsValue::from_serde(&result).expect("this can't fail")
}

fn run_impl(input: &Input) -> Result<Output, Error> {
  let cards: Vec<Card> = input.catalog.iter().cloned().map(|c| c.into()).collect();
  let catalog = Catalog::from_cards(cards);
  let mut rng = SmallRng::from_entropy();
  let pack = PACK_SIMULATOR.simulate(&mut rng, &catalog, &input.booster)?;
  Ok(Output {
    pack_size: pack.cards.len(),
    cards: pack.cards.iter().map(PackCard::from).collect(),
    outcome: pack.outcome,
  })
}
