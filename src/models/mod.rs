// Domain records and request payloads

pub mod fitness_goal;
pub mod progress_entry;
pub mod trainer;
pub mod user;
pub mod validation;
pub mod workout_plan;

pub use fitness_goal::*;
pub use progress_entry::*;
pub use trainer::*;
pub use user::*;
pub use validation::*;
pub use workout_plan::*;
