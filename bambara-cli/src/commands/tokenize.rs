//! Tokenize command implementation

use crate::commands::{CommonArgs, TokenizerFlags};
use crate::input;
use anyhow::Result;
use clap::Args;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input, output, and configuration options
    #[command(flatten)]
    pub common: CommonArgs,

    /// Tokenizer options
    #[command(flatten)]
    pub flags: TokenizerFlags,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        let (tokenizer, output) = self.common.build_tokenizer(&self.flags)?;
        let text = input::read_all(&self.common.input)?;

        log::info!("Tokenizing {} bytes of input", text.len());
        let tokens = tokenizer.tokenize(&text);
        log::debug!("Produced {} tokens", tokens.len());

        self.common.formatter(&output)?.write_items(&tokens)
    }
}
