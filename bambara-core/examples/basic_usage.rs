//! Basic usage of the Bambara tokenizer

use bambara_core::{tokenize_text, Tokenizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with the convenience function
    println!("=== Method 1: Convenience Function ===");
    let tokens = tokenize_text("N’tɛ donni kɛnɛya 1000 la.")?;
    println!("Tokens: {tokens:?}\n");

    // Method 2: Configured tokenizer with analysis helpers
    println!("=== Method 2: Custom Configuration ===");
    let tokenizer = Tokenizer::builder()
        .lowercase(true)
        .split_compounds(true)
        .stopwords(["ye"])
        .build()?;

    let text = "N’tɛ donni kɛnɛya 1000 la. Aw ye kalo 12 sɔrɔ! Tɔgɔ-ɲuman ye diya ye.";

    println!("Tokenized: {:?}", tokenizer.tokenize(text));
    println!("Sentences: {:?}", tokenizer.sentence_tokenize(text));
    println!("Frequencies: {:?}", tokenizer.word_frequency(text));
    println!(
        "Morphology of tɔgɔ-ɲuman: {:?}",
        tokenizer.analyze_morphology("tɔgɔ-ɲuman")
    );

    // Method 3: Diacritic normalization is a separate, opt-in transform
    println!("\n=== Method 3: Diacritic Normalization ===");
    println!("{}", tokenizer.normalize_diacritics("kɛnɛya ɲuman dɔn"));

    Ok(())
}
