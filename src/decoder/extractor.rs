use std::fs;
use std::path::Path;

use crate::error::{LoreError, Result};

/// Pulls every `'{...}'` block out of a lore document.
///
/// A block opens with `'{`, runs to the next single quote and must end
/// with `}` right before it; the body never contains a single quote.
/// Candidates that fail those rules are skipped one byte at a time, so a
/// stray quote cannot swallow the next real block.
pub fn extract_row_blocks(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\'' || bytes.get(i + 1) != Some(&b'{') {
            i += 1;
            continue;
        }

        let body_start = i + 1;
        let close = bytes[body_start..].iter().position(|&b| b == b'\'').map(|p| body_start + p);

        match close {
            // `{` + at least one byte + `}`
            Some(end) if end - body_start >= 3 && bytes[end - 1] == b'}' => {
                blocks.push(&content[body_start..end]);
                i = end + 1;
            }
            _ => i += 1,
        }
    }

    blocks
}

/// Reads a lore file and returns its row blocks, failing if none are found.
pub fn load_lore_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let blocks = extract_row_blocks(&content);

    if blocks.is_empty() {
        return Err(LoreError::Parse(format!("no lore rows found in {}", path.display())));
    }

    log::debug!("extracted {} rows from {:?}", blocks.len(), path);
    Ok(blocks.into_iter().map(str::to_owned).collect())
}
