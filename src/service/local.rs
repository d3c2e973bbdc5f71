use crate::declaration::Declaration;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Writes `declaration` as `{dir}/{name}.json`, replacing any previous version.
pub async fn save_local(dir: impl AsRef<Path>, declaration: &Declaration) -> Result<PathBuf> {
    let dir = dir.as_ref();

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Cannot create declarations directory {}", dir.display()))?;

    let path = dir.join(format!("{}.json", declaration.name));
    let json = declaration.to_pretty_json()?;

    log::debug!("Writing declaration to {}", path.display());
    tokio::fs::write(&path, json)
        .await
        .with_context(|| format!("Cannot write declaration file {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::DocumentDeclaration;
    use tempdir::TempDir;

    fn declaration(fetch: &str) -> Declaration {
        Declaration::new(
            "Example",
            "Terms of Service",
            DocumentDeclaration {
                fetch: fetch.to_owned(),
                select: vec!["main".to_owned()],
                remove: vec![],
            },
        )
    }

    #[tokio::test]
    async fn should_write_the_declaration_file() -> Result<()> {
        let dir = TempDir::new("declarations")?;
        let target = dir.path().join("services").join("declarations");

        let path = save_local(&target, &declaration("https://example.com/terms")).await?;

        assert_eq!(path, target.join("Example.json"));
        let written = std::fs::read_to_string(&path)?;
        assert!(written.ends_with("}\n"));
        let parsed: Declaration = serde_json::from_str(&written)?;
        assert_eq!(parsed, declaration("https://example.com/terms"));

        Ok(())
    }

    #[tokio::test]
    async fn should_overwrite_a_previous_declaration() -> Result<()> {
        let dir = TempDir::new("declarations")?;

        save_local(dir.path(), &declaration("https://example.com/old")).await?;
        let path = save_local(dir.path(), &declaration("https://example.com/new")).await?;

        let parsed: Declaration = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        assert_eq!(parsed.documents["Terms of Service"].fetch, "https://example.com/new");

        Ok(())
    }
}
