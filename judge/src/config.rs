use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use dummy_bot::DummyBot;
use random_bot::RandomBot;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sixty_six::Bot;

/// The bots the judge knows how to create.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotKind {
    Dummy,
    Random,
}

/// A player as described by its JSON config file, e.g.
/// `{"nick": "Rando", "bot": "random", "seed": 42}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub nick: String,
    pub bot: BotKind,
    /// Seed for bots that use randomness. Drawn from the judge's RNG if missing.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn create_bot<R: Rng + ?Sized>(&self, rng: &mut R) -> Box<dyn Bot> {
        match self.bot {
            BotKind::Dummy => Box::new(DummyBot::new(&self.nick)),
            BotKind::Random => {
                let seed = self.seed.unwrap_or_else(|| rng.gen());
                Box::new(RandomBot::new(&self.nick, seed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn parse_config() {
        let config: PlayerConfig =
            serde_json::from_str(r#"{"nick": "Rando", "bot": "random", "seed": 42}"#).unwrap();
        assert_eq!(config.bot, BotKind::Random);
        assert_eq!(config.seed, Some(42));

        let config: PlayerConfig =
            serde_json::from_str(r#"{"nick": "Dumbo", "bot": "dummy"}"#).unwrap();
        assert_eq!(config.seed, None);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(config.create_bot(&mut rng).name(), "Dumbo");

        assert!(serde_json::from_str::<PlayerConfig>(r#"{"nick": "x", "bot": "greedy"}"#).is_err());
    }

    #[test]
    fn missing_file() {
        assert!(PlayerConfig::load(Path::new("/no/such/config.json")).is_err());
    }
}
