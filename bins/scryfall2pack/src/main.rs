extern crate boostergen;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate rand;
extern crate serde_json;

use boostergen::card::Card;
use boostergen::catalog::Catalog;
use boostergen::data::PACK_SIMULATOR;
use boostergen::scryfall::ScryfallCard;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::env;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

#[derive(Debug)]
enum Error {
    Json(serde_json::Error),
    Io(std::io::Error),
    Sim(boostergen::Error),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<boostergen::Error> for Error {
    fn from(error: boostergen::Error) -> Self {
        Self::Sim(error)
    }
}

fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    let args: Vec<String> = env::args().collect();
    assert!(
        args.len() > 2,
        "Expected 2 arguments, card list JSON path and booster type"
    );
    let json_path_string = &args[1];
    let booster_type = &args[2];

    info!("Loading JSON file @ {}", json_path_string);
    let mut json_file_contents = String::new();
    File::open(Path::new(json_path_string))?.read_to_string(&mut json_file_contents)?;
    info!("Deserializing Scryfall JSON");
    let scryfall_cards: Vec<ScryfallCard> = serde_json::from_str(&json_file_contents)?;
    let cards: Vec<Card> = scryfall_cards.into_iter().map(|c| c.into()).collect();
    let catalog = Catalog::from_cards(cards);
    for (rarity, cards) in catalog.group_by_rarity() {
        info!("{:?}: {} cards", rarity, cards.len());
    }
    for (set, cards) in catalog.group_by_set() {
        info!("set {}: {} cards", set, cards.len());
    }
    info!("Opening a \"{}\" booster", booster_type);
    let mut rng = SmallRng::from_entropy();
    let pack = PACK_SIMULATOR.simulate(&mut rng, &catalog, booster_type)?;
    println!("{}", serde_json::to_string_pretty(&pack)?);
    Ok(())
}
