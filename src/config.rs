use crate::error::{ObservatoryError, Result};
use crate::types::config::ObservatoryConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "observatory.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".observatory/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/observatory/config.toml";

pub fn load_config(root: &Path) -> Result<Option<ObservatoryConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ObservatoryConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: ObservatoryConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ObservatoryError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ObservatoryError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_data_dir_has_no_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[recommend]
top = 3

[output]
format = "md"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[data]
studies = "inventory.csv"

[recommend]
top = 10
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".observatory"))
            .expect("local observatory dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[recommend]
top = 12
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.studies_file(), "inventory.csv");
        assert_eq!(cfg.recommend_top(), 12);
        assert_eq!(
            cfg.output.as_ref().and_then(|output| output.format.as_deref()),
            Some("md")
        );
    }

    #[test]
    fn load_config_rejects_invalid_merged_config() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[recommend]
top = 0
"#,
        )
        .expect("repo config should write");

        assert!(load_config_with_global(root.path(), None).is_err());
    }
}
