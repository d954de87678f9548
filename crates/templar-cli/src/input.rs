//! Code body resolution for `create` and `update`.
//!
//! The body can come from:
//! - an inline string via `--code`
//! - a file via `--code-file <path>`
//! - stdin via `--code-file -`

use std::io::Read;
use std::path::Path;

/// Resolves the template body from CLI arguments.
///
/// `--code-file` takes precedence over `--code`. Returns `None` when
/// neither was given. File and stdin content is kept verbatim.
pub fn resolve_code(code: Option<&str>, code_file: Option<&Path>) -> anyhow::Result<Option<String>> {
    match code_file {
        Some(path) if path == Path::new("-") => read_from_stdin().map(Some),
        Some(path) => read_from_file(path).map(Some),
        None => Ok(code.map(String::from)),
    }
}

fn read_from_file(path: &Path) -> anyhow::Result<String> {
    if !path.is_file() {
        anyhow::bail!("code file not found: {}", path.display());
    }
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read code file {}: {e}", path.display()))
}

fn read_from_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("failed to read stdin: {e}"))?;
    Ok(buffer)
}
