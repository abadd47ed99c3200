pub mod scenario;

pub use scenario::{Scenario, ScenarioReport, run_scenario};
