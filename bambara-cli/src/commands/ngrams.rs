//! N-grams command implementation

use crate::commands::{CommonArgs, TokenizerFlags};
use crate::input;
use anyhow::Result;
use clap::Args;

/// Arguments for the ngrams command
#[derive(Debug, Args)]
pub struct NgramsArgs {
    /// Input, output, and configuration options
    #[command(flatten)]
    pub common: CommonArgs,

    /// Tokenizer options
    #[command(flatten)]
    pub flags: TokenizerFlags,

    /// N-gram size in characters
    #[arg(short = 'n', long = "size", value_name = "N", default_value_t = 2)]
    pub size: usize,
}

impl NgramsArgs {
    /// Execute the ngrams command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        let (tokenizer, output) = self.common.build_tokenizer(&self.flags)?;
        let text = input::read_all(&self.common.input)?;

        let grams = tokenizer.ngrams(&text, self.size);
        log::debug!("Generated {} {}-grams", grams.len(), self.size);

        self.common.formatter(&output)?.write_items(&grams)
    }
}
