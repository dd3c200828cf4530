//! Configuration discovery and effective settings resolution.
//!
//! problem-diff reads `problem-diff.toml|yaml|yml` from the root directory
//! (or closest ancestor) and merges it with CLI flags into an `Effective`.
//! Defaults:
//! - `output`: `human`
//! - `duplicates`: `last`
//! - `write.pretty`: false
//! - `paths.*`: unset (prompted)
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Error, Result};
use crate::models::policy::DuplicatePolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILES: [&str; 3] = ["problem-diff.toml", "problem-diff.yaml", "problem-diff.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Output document settings under `[write]`.
pub struct WriteCfg {
    pub pretty: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Default file paths under `[paths]`, relative to the config file.
pub struct PathsCfg {
    pub first: Option<String>,
    pub second: Option<String>,
    pub only_first: Option<String>,
    pub only_second: Option<String>,
    pub both: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `problem-diff.toml|yaml`.
pub struct DiffConfig {
    pub output: Option<String>,
    pub duplicates: Option<DuplicatePolicy>,
    pub write: Option<WriteCfg>,
    pub paths: Option<PathsCfg>,
}

#[derive(Debug, Default, Clone)]
/// Values supplied on the command line; `None` defers to config/defaults.
pub struct CliOverrides {
    pub root: Option<String>,
    pub first: Option<String>,
    pub second: Option<String>,
    pub only_first: Option<String>,
    pub only_second: Option<String>,
    pub both: Option<String>,
    pub output: Option<String>,
    pub duplicates: Option<String>,
    pub pretty: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the compare run.
pub struct Effective {
    pub root: PathBuf,
    pub config_found: bool,
    pub output: String,
    pub duplicates: DuplicatePolicy,
    pub pretty: bool,
    pub first: Option<String>,
    pub second: Option<String>,
    pub only_first: Option<String>,
    pub only_second: Option<String>,
    pub both: Option<String>,
}

/// Walk upward from `start` to find the directory holding the config.
///
/// Stops at a config file or a `.git` directory; falls back to `start`.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `DiffConfig` from `problem-diff.toml` or `.yaml|.yml` if present and valid.
pub fn load_config(root: &Path) -> Option<DiffConfig> {
    let toml_path = root.join(CONFIG_FILES[0]);
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        return toml::from_str(&s).ok();
    }
    for yml in &CONFIG_FILES[1..] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            return serde_yaml::from_str(&s).ok();
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: CliOverrides) -> Result<Effective> {
    // Absolute start so the upward walk can reach ancestors of "."
    let start = PathBuf::from(cli.root.as_deref().unwrap_or("."));
    let start = fs::canonicalize(&start).unwrap_or(start);
    let root = detect_root(&start);
    let loaded = load_config(&root);
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let output = cli
        .output
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    if output != "human" && output != "json" {
        return Err(Error::InvalidOption(format!(
            "unknown output mode '{}' (expected human|json)",
            output
        )));
    }

    let duplicates = match cli.duplicates.as_deref() {
        Some(s) => s.parse::<DuplicatePolicy>().map_err(Error::InvalidOption)?,
        None => cfg.duplicates.unwrap_or_default(),
    };

    let pretty = cli
        .pretty
        .or_else(|| cfg.write.as_ref().and_then(|w| w.pretty))
        .unwrap_or(false);

    // Configured paths are relative to the config file, CLI paths to the cwd.
    // Blank values stay blank so the prompt stage rejects them.
    let paths = cfg.paths.unwrap_or_default();
    let from_cfg = |p: Option<String>| {
        p.map(|s| {
            if s.trim().is_empty() {
                s
            } else {
                root.join(s).to_string_lossy().to_string()
            }
        })
    };

    Ok(Effective {
        first: cli.first.or_else(|| from_cfg(paths.first)),
        second: cli.second.or_else(|| from_cfg(paths.second)),
        only_first: cli.only_first.or_else(|| from_cfg(paths.only_first)),
        only_second: cli.only_second.or_else(|| from_cfg(paths.only_second)),
        both: cli.both.or_else(|| from_cfg(paths.both)),
        root,
        config_found,
        output,
        duplicates,
        pretty,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn at(root: &Path) -> CliOverrides {
        CliOverrides {
            root: root.to_str().map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(at(dir.path())).unwrap();
        assert!(!eff.config_found);
        assert_eq!(eff.output, "human");
        assert_eq!(eff.duplicates, DuplicatePolicy::Last);
        assert!(!eff.pretty);
        assert!(eff.first.is_none() && eff.both.is_none());
    }

    #[test]
    fn test_load_toml_and_resolve_paths() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("problem-diff.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "json"
duplicates = "first"
[write]
pretty = true
[paths]
first = "a.json"
both = "out/both.json"
    "#
        )
        .unwrap();

        let eff = resolve_effective(at(root)).unwrap();
        let root = root.canonicalize().unwrap();
        assert!(eff.config_found);
        assert_eq!(eff.output, "json");
        assert_eq!(eff.duplicates, DuplicatePolicy::First);
        assert!(eff.pretty);
        assert_eq!(
            eff.first.as_deref(),
            Some(root.join("a.json").to_string_lossy().as_ref())
        );
        assert_eq!(
            eff.both.as_deref(),
            Some(root.join("out/both.json").to_string_lossy().as_ref())
        );
        assert!(eff.second.is_none());
    }

    #[test]
    fn test_load_yaml_from_subdirectory() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("problem-diff.yaml"),
            "output: human\nduplicates: last\nwrite:\n  pretty: false\n",
        )
        .unwrap();
        let sub = root.join("nested/dir");
        fs::create_dir_all(&sub).unwrap();

        let eff = resolve_effective(at(&sub)).unwrap();
        assert!(eff.config_found);
        assert_eq!(eff.root, root.canonicalize().unwrap());
        assert_eq!(eff.duplicates, DuplicatePolicy::Last);
    }

    #[test]
    fn test_cli_takes_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("problem-diff.toml"),
            "output = \"json\"\nduplicates = \"first\"\n[write]\npretty = true\n[paths]\nfirst = \"cfg.json\"\n",
        )
        .unwrap();
        let eff = resolve_effective(CliOverrides {
            first: Some("cli.json".into()),
            output: Some("human".into()),
            duplicates: Some("LAST".into()),
            pretty: Some(false),
            ..at(root)
        })
        .unwrap();
        assert_eq!(eff.first.as_deref(), Some("cli.json"));
        assert_eq!(eff.output, "human");
        assert_eq!(eff.duplicates, DuplicatePolicy::Last);
        assert!(!eff.pretty);
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        let err = resolve_effective(CliOverrides {
            output: Some("xml".into()),
            ..at(dir.path())
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), 1);
        let err = resolve_effective(CliOverrides {
            duplicates: Some("middle".into()),
            ..at(dir.path())
        })
        .unwrap_err();
        assert!(err.to_string().contains("middle"));
    }

    #[test]
    fn test_blank_configured_path_is_kept_blank() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("problem-diff.toml"),
            "[paths]\nfirst = \"  \"\nsecond = \"b.json\"\n",
        )
        .unwrap();
        let eff = resolve_effective(at(dir.path())).unwrap();
        assert_eq!(eff.first.as_deref(), Some("  "));
        assert!(eff.second.as_deref().unwrap().ends_with("b.json"));
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("problem-diff.toml"), "output = [").unwrap();
        let eff = resolve_effective(at(dir.path())).unwrap();
        assert!(!eff.config_found);
        assert_eq!(eff.output, "human");
    }
}
