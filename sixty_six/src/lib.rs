pub use announcement::*;
pub use bot::*;
pub use cards::*;
pub use cards_set::*;
pub use errors::*;
pub use legality::*;
pub use player_state::*;
pub use protocol_types::*;
pub use scoring::*;
pub use stock::*;
pub use trick::*;

mod announcement;
#[cfg(test)]
mod arbitrary;
mod bot;
mod cards;
mod cards_set;
mod errors;
mod legality;
mod player_state;
mod protocol_types;
mod scoring;
mod stock;
mod trick;
