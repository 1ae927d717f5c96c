//! # Scryfall catalog records
//!
//! The catalog provider fetches Scryfall-shaped card objects for one set.
//! This module defines the subset of fields the simulator consumes and the
//! conversion into the internal [`Card`](crate::card::Card).
use crate::card::{Card, Rarity, SetCode};
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ScryfallCard {
  pub name: String,
  #[serde(default)]
  pub type_line: String,
  #[serde(default)]
  pub image_uris: HashMap<String, String>,
  #[serde(default)]
  pub prices: Prices,
  #[serde(default)]
  pub related_uris: HashMap<String, String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub card_faces: Vec<ScryfallCard>,
  #[serde(default)]
  pub set: SetCode,
  #[serde(default)]
  pub rarity: Rarity,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Prices {
  #[serde(default)]
  pub usd: Option<String>,
}

impl Into<Card> for ScryfallCard {
  fn into(self) -> Card {
    let image_uri = match self.image_uris.get("normal") {
      None => {
        // Multi-faced cards keep their image uris on the faces
        if let Some(card_face) = self.card_faces.first() {
          card_face
            .image_uris
            .get("normal")
            .map(String::as_str)
            .unwrap_or("")
        } else {
          ""
        }
      }
      Some(uri) => uri,
    }
    .to_string();
    let edhrec_uri = self.related_uris.get("edhrec").cloned().unwrap_or_default();
    Card {
      name: self.name.trim().to_string(),
      type_line: self.type_line,
      rarity: self.rarity,
      set: self.set,
      usd_price: self.prices.usd,
      image_uri,
      edhrec_uri,
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::card::{Card, Rarity};
  use crate::scryfall::*;

  #[test]
  fn conversion_keeps_display_metadata() {
    let json = r#"{
      "name": " Mossborn Hydra ",
      "type_line": "Creature — Hydra",
      "set": "blb",
      "rarity": "rare",
      "prices": { "usd": "14.06", "eur": "11.50" },
      "image_uris": { "normal": "https://cards.example/hydra.jpg" },
      "related_uris": { "edhrec": "https://edhrec.com/route/mossborn-hydra" }
    }"#;
    let scryfall: ScryfallCard = serde_json::from_str(json).unwrap();
    let card: Card = scryfall.into();
    assert_eq!(card.name, "Mossborn Hydra");
    assert_eq!(card.type_line, "Creature — Hydra");
    assert_eq!(card.rarity, Rarity::Rare);
    assert_eq!(card.set.as_str(), "blb");
    assert_eq!(card.usd_price.as_deref(), Some("14.06"));
    assert_eq!(card.image_uri, "https://cards.example/hydra.jpg");
    assert_eq!(card.edhrec_uri, "https://edhrec.com/route/mossborn-hydra");
  }

  #[test]
  fn image_uri_falls_back_to_first_card_face() {
    let json = r#"{
      "name": "Fabled Passage // Token",
      "rarity": "uncommon",
      "set": "eld",
      "card_faces": [
        { "name": "Fabled Passage", "image_uris": { "normal": "https://cards.example/face.jpg" } }
      ]
    }"#;
    let scryfall: ScryfallCard = serde_json::from_str(json).unwrap();
    let card: Card = scryfall.into();
    assert_eq!(card.image_uri, "https://cards.example/face.jpg");
  }

  #[test]
  fn missing_optional_fields_default() {
    let json = r#"{ "name": "Forest" }"#;
    let scryfall: ScryfallCard = serde_json::from_str(json).unwrap();
    let card: Card = scryfall.into();
    assert_eq!(card.rarity, Rarity::Unknown);
    assert_eq!(card.usd_price, None);
    assert_eq!(card.image_uri, "");
    assert_eq!(card.edhrec_uri, "");
  }
}
