//! Frequency command implementation

use crate::commands::{CommonArgs, TokenizerFlags};
use crate::input;
use anyhow::Result;
use clap::Args;

/// Arguments for the frequency command
#[derive(Debug, Args)]
pub struct FrequencyArgs {
    /// Input, output, and configuration options
    #[command(flatten)]
    pub common: CommonArgs,

    /// Tokenizer options
    #[command(flatten)]
    pub flags: TokenizerFlags,
}

impl FrequencyArgs {
    /// Execute the frequency command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        let (tokenizer, output) = self.common.build_tokenizer(&self.flags)?;
        let text = input::read_all(&self.common.input)?;

        let mut counts: Vec<(String, usize)> =
            tokenizer.word_frequency(&text).into_iter().collect();
        // Highest count first; ties in token order for stable output.
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        log::debug!("Counted {} distinct tokens", counts.len());

        self.common.formatter(&output)?.write_counts(&counts)
    }
}
