pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Resolve calculator input: `--input` file first, then piped stdin JSON,
/// then whatever the command's flags describe.
pub fn resolve<T: DeserializeOwned>(
    path: Option<&str>,
    from_flags: impl FnOnce() -> T,
) -> Result<T, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return file::read_structured(path);
    }
    if let Some(data) = stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Ok(from_flags())
}
