pub mod logic;
pub mod types;

pub use logic::{process_input, process_timer, update};
pub use types::{ArtilleryGame, ArtilleryInput, Effect, GameEvent, Phase, Timer, Update};
