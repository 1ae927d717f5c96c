//! # Booster Pack Simulation Library
//!
//! boostergen simulates opening randomized Magic: The Gathering booster packs.
//! Given a card catalog for a set and a weighted outcome table describing a
//! booster product, it produces a statistically faithful random pack for
//! display. It is consumed by the booster simulator web app through the wasm
//! interface defined in [`interface`](crate::interface).

#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate lazy_static;
extern crate rand;
extern crate serde_json;
extern crate thiserror;
extern crate wasm_bindgen;

pub mod booster;
pub mod card;
pub mod catalog;
pub mod data;
pub mod error;
pub mod interface;
pub mod sample;
pub mod scryfall;
pub mod select;
pub mod simulation;

pub use crate::error::Error;
pub use crate::interface::boostergen_run;
pub use crate::simulation::{PackSimulator, SimulatedPack};
