pub mod calculator;
pub mod error;
pub mod plan;
pub mod profile;

pub use calculator::compute;
pub use error::{Error, Result};
pub use plan::{EnergyEstimate, PlanResult};
pub use profile::{ActivityLevel, Gender, ProfileInput};
