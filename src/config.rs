//! Typed configuration store for the demo suite.
//!
//! The demos read provider credentials from a dotenv-style file (`.env`).
//! This module owns that file: the setup wizard renders and writes it, the
//! launcher loads it back as a typed [`ProviderConfig`] and injects the values
//! into each demo process explicitly instead of relying on ambient globals.

use std::path::Path;

use crate::error::{Error, Result};

/// Default location of the configuration store, relative to the working directory.
pub const STORE_PATH: &str = ".env";

/// The four supported AI backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Anthropic,
    OpenAi,
    Google,
    Proxy,
}

impl ProviderKind {
    /// Total constructor over raw menu input.
    ///
    /// Accepts the menu number or the provider tag; anything else (typos,
    /// empty input) falls back to the default. The fallback is deliberate
    /// operator-typo tolerance, kept as an explicit branch so it stays
    /// visible and testable.
    pub fn from_choice(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "1" | "anthropic" => Self::Anthropic,
            "2" | "openai" => Self::OpenAi,
            "3" | "google" => Self::Google,
            "4" | "proxy" => Self::Proxy,
            _ => Self::default(),
        }
    }

    /// The discriminator tag persisted in the store.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::OpenAi => "openai",
            Self::Google => "google",
            Self::Proxy => "proxy",
        }
    }
}

impl Default for ProviderKind {
    fn default() -> Self {
        Self::Anthropic
    }
}

/// A validated provider selection with its credentials.
///
/// Exactly one variant is active; the persisted store carries the
/// discriminator plus only that variant's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    Anthropic { api_key: String },
    OpenAi { api_key: String },
    Google { api_key: String },
    Proxy { base_url: String, api_key: String },
}

impl ProviderConfig {
    /// Build a validated configuration from wizard input.
    ///
    /// Empty required fields are fatal; `base_url` is only consulted for the
    /// proxy variant and has its trailing slash stripped.
    pub fn from_credentials(
        kind: ProviderKind,
        api_key: &str,
        base_url: Option<&str>,
    ) -> Result<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(Error::MissingCredential(match kind {
                ProviderKind::Proxy => "proxy API token",
                _ => "API key",
            }));
        }
        let api_key = api_key.to_string();

        match kind {
            ProviderKind::Anthropic => Ok(Self::Anthropic { api_key }),
            ProviderKind::OpenAi => Ok(Self::OpenAi { api_key }),
            ProviderKind::Google => Ok(Self::Google { api_key }),
            ProviderKind::Proxy => {
                let base_url = base_url.unwrap_or("").trim();
                if base_url.is_empty() {
                    return Err(Error::MissingCredential("proxy base URL"));
                }
                Ok(Self::Proxy {
                    base_url: base_url.trim_end_matches('/').to_string(),
                    api_key,
                })
            }
        }
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Anthropic { .. } => ProviderKind::Anthropic,
            Self::OpenAi { .. } => ProviderKind::OpenAi,
            Self::Google { .. } => ProviderKind::Google,
            Self::Proxy { .. } => ProviderKind::Proxy,
        }
    }

    /// Render the exact store contents for this configuration.
    pub fn render(&self) -> String {
        let mut out = format!("AI_PROVIDER={}\n", self.kind().tag());
        match self {
            Self::Anthropic { api_key } => {
                out.push_str(&format!("ANTHROPIC_API_KEY={api_key}\n"));
            }
            Self::OpenAi { api_key } => {
                out.push_str(&format!("OPENAI_API_KEY={api_key}\n"));
            }
            Self::Google { api_key } => {
                out.push_str(&format!("GOOGLE_API_KEY={api_key}\n"));
            }
            Self::Proxy { base_url, api_key } => {
                out.push_str(&format!("PROXY_BASE_URL={base_url}\n"));
                out.push_str(&format!("PROXY_API_KEY={api_key}\n"));
            }
        }
        out
    }

    /// Key-value pairs injected into each demo process at spawn time.
    pub fn env_vars(&self) -> Vec<(&'static str, &str)> {
        let mut vars = vec![("AI_PROVIDER", self.kind().tag())];
        match self {
            Self::Anthropic { api_key } => vars.push(("ANTHROPIC_API_KEY", api_key)),
            Self::OpenAi { api_key } => vars.push(("OPENAI_API_KEY", api_key)),
            Self::Google { api_key } => vars.push(("GOOGLE_API_KEY", api_key)),
            Self::Proxy { base_url, api_key } => {
                vars.push(("PROXY_BASE_URL", base_url));
                vars.push(("PROXY_API_KEY", api_key));
            }
        }
        vars
    }

    /// Load and validate the store at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::InvalidConfig(format!(
                "{} not found (run `democtl setup` first)",
                path.display()
            )));
        }

        let mut vars = std::collections::HashMap::new();
        let iter = dotenvy::from_path_iter(path)
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        for item in iter {
            let (key, value) = item.map_err(|e| Error::InvalidConfig(e.to_string()))?;
            vars.insert(key, value);
        }

        let provider = vars
            .get("AI_PROVIDER")
            .ok_or_else(|| Error::InvalidConfig("AI_PROVIDER is not set".into()))?;

        let require = |key: &str| -> Result<String> {
            match vars.get(key) {
                Some(v) if !v.is_empty() => Ok(v.clone()),
                _ => Err(Error::InvalidConfig(format!("{key} is not set"))),
            }
        };

        match provider.to_lowercase().as_str() {
            "anthropic" => Ok(Self::Anthropic {
                api_key: require("ANTHROPIC_API_KEY")?,
            }),
            "openai" => Ok(Self::OpenAi {
                api_key: require("OPENAI_API_KEY")?,
            }),
            "google" => Ok(Self::Google {
                api_key: require("GOOGLE_API_KEY")?,
            }),
            "proxy" => Ok(Self::Proxy {
                base_url: require("PROXY_BASE_URL")?.trim_end_matches('/').to_string(),
                api_key: require("PROXY_API_KEY")?,
            }),
            other => Err(Error::InvalidConfig(format!("unknown provider: {other}"))),
        }
    }

    /// Atomically persist the store: write a sibling temp file, then rename.
    /// A failed write never leaves a partial store behind.
    pub fn write_atomic(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp = path.with_file_name(tmp_name);
        std::fs::write(&tmp, self.render())?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_choice_maps_numbers_and_tags() {
        assert_eq!(ProviderKind::from_choice("1"), ProviderKind::Anthropic);
        assert_eq!(ProviderKind::from_choice("2"), ProviderKind::OpenAi);
        assert_eq!(ProviderKind::from_choice("3"), ProviderKind::Google);
        assert_eq!(ProviderKind::from_choice("4"), ProviderKind::Proxy);
        assert_eq!(ProviderKind::from_choice("openai"), ProviderKind::OpenAi);
        assert_eq!(ProviderKind::from_choice(" Google "), ProviderKind::Google);
    }

    #[test]
    fn from_choice_falls_back_to_default() {
        assert_eq!(ProviderKind::from_choice("9"), ProviderKind::Anthropic);
        assert_eq!(ProviderKind::from_choice(""), ProviderKind::Anthropic);
        assert_eq!(ProviderKind::from_choice("gpt"), ProviderKind::Anthropic);
    }

    #[test]
    fn from_credentials_rejects_empty_key_for_every_kind() {
        for kind in [
            ProviderKind::Anthropic,
            ProviderKind::OpenAi,
            ProviderKind::Google,
            ProviderKind::Proxy,
        ] {
            let err = ProviderConfig::from_credentials(kind, "", Some("https://p.example.com"))
                .unwrap_err();
            assert!(matches!(err, Error::MissingCredential(_)));
        }
    }

    #[test]
    fn from_credentials_rejects_missing_proxy_url() {
        let err = ProviderConfig::from_credentials(ProviderKind::Proxy, "tok", None).unwrap_err();
        assert!(matches!(err, Error::MissingCredential("proxy base URL")));
        let err =
            ProviderConfig::from_credentials(ProviderKind::Proxy, "tok", Some("  ")).unwrap_err();
        assert!(matches!(err, Error::MissingCredential("proxy base URL")));
    }

    #[test]
    fn from_credentials_normalizes_proxy_url() {
        let config = ProviderConfig::from_credentials(
            ProviderKind::Proxy,
            "tok-456",
            Some("https://proxy.example.com/"),
        )
        .unwrap();
        match config {
            ProviderConfig::Proxy { ref base_url, .. } => {
                assert_eq!(base_url, "https://proxy.example.com");
            }
            ref other => panic!("unexpected config: {other:?}"),
        }
    }

    #[test]
    fn from_credentials_ignores_base_url_for_single_key_kinds() {
        let config = ProviderConfig::from_credentials(
            ProviderKind::Google,
            "AIza123",
            Some("https://ignored.example.com"),
        )
        .unwrap();
        assert_eq!(config, ProviderConfig::Google { api_key: "AIza123".into() });
    }

    #[test]
    fn render_google_store_bytes() {
        let config = ProviderConfig::Google {
            api_key: "AIza123".into(),
        };
        assert_eq!(config.render(), "AI_PROVIDER=google\nGOOGLE_API_KEY=AIza123\n");
    }

    #[test]
    fn render_proxy_store_bytes() {
        let config = ProviderConfig::Proxy {
            base_url: "https://proxy.example.com".into(),
            api_key: "tok-456".into(),
        };
        assert_eq!(
            config.render(),
            "AI_PROVIDER=proxy\nPROXY_BASE_URL=https://proxy.example.com\nPROXY_API_KEY=tok-456\n"
        );
    }

    #[test]
    fn render_contains_only_active_variant_fields() {
        let config = ProviderConfig::Anthropic {
            api_key: "sk-ant-test".into(),
        };
        let rendered = config.render();
        assert!(rendered.contains("ANTHROPIC_API_KEY="));
        assert!(!rendered.contains("OPENAI_API_KEY"));
        assert!(!rendered.contains("GOOGLE_API_KEY"));
        assert!(!rendered.contains("PROXY_"));
    }

    #[test]
    fn load_round_trips_every_variant() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");

        let configs = [
            ProviderConfig::Anthropic { api_key: "a".into() },
            ProviderConfig::OpenAi { api_key: "b".into() },
            ProviderConfig::Google { api_key: "c".into() },
            ProviderConfig::Proxy {
                base_url: "https://p.example.com".into(),
                api_key: "d".into(),
            },
        ];
        for config in configs {
            config.write_atomic(&path).unwrap();
            assert_eq!(ProviderConfig::load(&path).unwrap(), config);
        }
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProviderConfig::load(dir.path().join(".env")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn load_rejects_missing_discriminator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "OPENAI_API_KEY=sk-test\n").unwrap();
        assert!(ProviderConfig::load(&path).is_err());
    }

    #[test]
    fn load_rejects_unknown_provider() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "AI_PROVIDER=bedrock\n").unwrap();
        assert!(ProviderConfig::load(&path).is_err());
    }

    #[test]
    fn load_rejects_empty_credential() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "AI_PROVIDER=google\nGOOGLE_API_KEY=\n").unwrap();
        assert!(ProviderConfig::load(&path).is_err());
    }

    #[test]
    fn load_normalizes_proxy_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "AI_PROVIDER=proxy\nPROXY_BASE_URL=https://p.example.com/\nPROXY_API_KEY=t\n",
        )
        .unwrap();
        match ProviderConfig::load(&path).unwrap() {
            ProviderConfig::Proxy { base_url, .. } => {
                assert_eq!(base_url, "https://p.example.com");
            }
            other => panic!("unexpected config: {other:?}"),
        }
    }

    #[test]
    fn write_atomic_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        let config = ProviderConfig::OpenAi { api_key: "sk-x".into() };
        config.write_atomic(&path).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn env_vars_injects_discriminator_and_fields() {
        let config = ProviderConfig::Proxy {
            base_url: "https://p.example.com".into(),
            api_key: "tok".into(),
        };
        let vars = config.env_vars();
        assert!(vars.contains(&("AI_PROVIDER", "proxy")));
        assert!(vars.contains(&("PROXY_BASE_URL", "https://p.example.com")));
        assert!(vars.contains(&("PROXY_API_KEY", "tok")));
        assert_eq!(vars.len(), 3);
    }
}
