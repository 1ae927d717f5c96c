//! # Internal card representation
//!
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

// NOTE: PartialEq and Eq are implemented below
/// Card represents a single printed Magic: The Gathering card from a set
/// catalog. Price, type line, and the URI fields are display metadata carried
/// through for the UI; the engine itself only reads `rarity` and `set`.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Card {
  /// String representing the card name
  pub name: String,
  /// The printed type line, e.g. "Creature — Elf Druid"
  pub type_line: String,
  /// Card rarity
  pub rarity: Rarity,
  /// Card release set code
  pub set: SetCode,
  /// USD price string, when the catalog provider knows one
  pub usd_price: Option<String>,
  /// A URI to an image of the card
  pub image_uri: String,
  /// A URI to the card's EDHREC page
  pub edhrec_uri: String,
}

/// Card rarity tiers as reported by the catalog provider
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialOrd, PartialEq, Eq, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
  Common,
  Uncommon,
  Rare,
  Mythic,
  #[serde(other)]
  Unknown,
}

/// An open set code, e.g. "blb" for Bloomburrow or "spg" for Special Guests
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetCode(String);

impl Card {
  /// Returns an empty new card
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a card with only the fields the sampling engine reads
  pub fn with_rarity(name: &str, rarity: Rarity, set: SetCode) -> Self {
    Self {
      name: name.to_string(),
      rarity,
      set,
      ..Self::default()
    }
  }
}

impl PartialEq for Card {
  fn eq(&self, other: &Self) -> bool {
    self.name == other.name
  }
}

impl Eq for Card {}

impl Hash for Card {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.name.hash(state);
  }
}

impl Default for Rarity {
  fn default() -> Self {
    Self::Unknown
  }
}

impl SetCode {
  pub fn new<S: Into<String>>(code: S) -> Self {
    Self(code.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for SetCode {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for SetCode {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, ()> {
    Ok(Self::new(s))
  }
}
