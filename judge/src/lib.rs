mod config;
mod deal;
mod error;
mod game;
mod player;
mod recording;
#[cfg(test)]
mod test_bots;
mod trick;
pub use config::*;
pub use deal::*;
pub use error::*;
pub use game::*;
pub use player::*;
pub use recording::*;
pub use trick::*;
