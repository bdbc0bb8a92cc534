use std::io;
use std::path::Path;
use tokenizers::{Tokenizer, TruncationParams};

/// Loads `tokenizer.json` from an encoder directory (or an explicit tokenizer path)
/// with truncation at `max_len` tokens.
pub fn load_tokenizer(model_path: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let tokenizer_path = if model_path
        .file_name()
        .is_some_and(|name| name == std::ffi::OsStr::new("tokenizer.json"))
    {
        model_path.to_path_buf()
    } else {
        model_path.join("tokenizer.json")
    };

    let mut tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(io::Error::other)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;

    // Texts are encoded one at a time, so no padding.
    tokenizer.with_padding(None);

    Ok(tokenizer)
}
