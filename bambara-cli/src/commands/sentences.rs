//! Sentences command implementation

use crate::commands::{CommonArgs, TokenizerFlags};
use crate::input;
use anyhow::Result;
use clap::Args;

/// Arguments for the sentences command
#[derive(Debug, Args)]
pub struct SentencesArgs {
    /// Input, output, and configuration options
    #[command(flatten)]
    pub common: CommonArgs,
}

impl SentencesArgs {
    /// Execute the sentences command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        let (tokenizer, output) = self.common.build_tokenizer(&TokenizerFlags::default())?;
        let text = input::read_all(&self.common.input)?;

        let sentences = tokenizer.sentence_tokenize(&text);
        log::debug!("Split input into {} sentences", sentences.len());

        self.common.formatter(&output)?.write_items(&sentences)
    }
}
