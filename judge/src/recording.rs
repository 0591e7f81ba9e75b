use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sixty_six::{Card, TrickCompletedResult};

/// Collects the tricks of every deal in memory. Call
/// [`Recorder::write_deal_recordings`] between games to flush them to disk,
/// one JSON file per deal.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    deals: Vec<DealRecording>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRecording {
    pub trump: Card,
    pub first_leader: String,
    pub tricks: Vec<TrickCompletedResult>,
    /// `None` while the deal is running, and after a draw.
    pub winner: Option<String>,
    pub deal_points: u32,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            deals: Vec::new(),
        })
    }

    pub fn start_deal(&mut self, trump: Card, first_leader: &str) {
        self.deals.push(DealRecording {
            trump,
            first_leader: String::from(first_leader),
            tricks: Vec::new(),
            winner: None,
            deal_points: 0,
        });
    }

    pub fn store_trick(&mut self, result: TrickCompletedResult) {
        if let Some(deal) = self.deals.last_mut() {
            deal.tricks.push(result);
        }
    }

    pub fn finish_deal(&mut self, winner: Option<&str>, deal_points: u32) {
        if let Some(deal) = self.deals.last_mut() {
            deal.winner = winner.map(String::from);
            deal.deal_points = deal_points;
        }
    }

    /// The deals recorded since the last write.
    pub fn deals(&self) -> &[DealRecording] {
        &self.deals
    }

    /// Writes each recorded deal to `deal_NNNNNN.json`, numbering on from
    /// previous calls.
    pub fn write_deal_recordings(&mut self) -> anyhow::Result<()> {
        for deal in std::mem::take(&mut self.deals) {
            let filepath = self.directory.join(format!("deal_{:0>6}.json", self.num));
            let writer = BufWriter::new(File::create(filepath)?);
            serde_json::to_writer_pretty(writer, &deal)?;
            self.num += 1;
        }
        Ok(())
    }
}
