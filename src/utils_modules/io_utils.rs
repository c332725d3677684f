use crate::common::*;

#[doc = r#"
    Reads a TOML file and deserializes it into the requested structure.

    1. Reads the file at `file_path` into a string
    2. Parses it with `toml::from_str()` into `T`
    3. Returns the parsed structure, or an error naming the file

    # Type Parameters
    * `T` - a structure implementing `DeserializeOwned`

    # Arguments
    * `file_path` - absolute or relative path of the TOML file

    # Returns
    * `Result<T, anyhow::Error>`

    # Errors
    - the file does not exist or cannot be read
    - the TOML is malformed or does not match `T`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] Failed to read '{}'", file_path))?;

    let toml: T = toml::from_str(&toml_content)
        .with_context(|| format!("[read_toml_from_file] Failed to parse '{}'", file_path))?;

    Ok(toml)
}

#[doc = "Creates `dir` (and its parents) if it does not exist yet."]
pub async fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("[ensure_dir] Failed to create directory {:?}", dir))
}
