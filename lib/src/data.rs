//! # Embedded default configuration
use crate::booster::OutcomeTable;
use crate::error::Error;
use crate::simulation::PackSimulator;

/// Returns the default outcome table from data/outcomes.json
pub fn default_outcomes() -> Result<OutcomeTable, Error> {
  OutcomeTable::from_json(include_str!("../../data/outcomes.json"))
}

lazy_static! {
  /// The validated default configuration. Construction fails fast: an invalid
  /// embedded table must stop the process at first use, never surface
  /// mid-simulation.
  pub static ref OUTCOMES: OutcomeTable = default_outcomes().expect("default_outcomes() failed");
  pub static ref PACK_SIMULATOR: PackSimulator =
    PackSimulator::new(OUTCOMES.clone()).expect("PackSimulator::new failed");
}
