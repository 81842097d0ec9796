//! Provider menu metadata for the setup wizard.

use crate::config::ProviderKind;

/// One menu entry. `kind` carries the credential semantics; the rest is
/// display material.
pub struct ProviderEntry {
    pub kind: ProviderKind,
    pub label: &'static str,
    pub key_prompt: &'static str,
    pub signup_url: &'static str,
}

/// Menu order matches the numeric choices accepted by
/// [`ProviderKind::from_choice`].
pub const PROVIDERS: &[ProviderEntry] = &[
    ProviderEntry {
        kind: ProviderKind::Anthropic,
        label: "Claude (Anthropic)",
        key_prompt: "Anthropic API key:",
        signup_url: "https://console.anthropic.com",
    },
    ProviderEntry {
        kind: ProviderKind::OpenAi,
        label: "GPT (OpenAI)",
        key_prompt: "OpenAI API key:",
        signup_url: "https://platform.openai.com/api-keys",
    },
    ProviderEntry {
        kind: ProviderKind::Google,
        label: "Gemini (Google)",
        key_prompt: "Google AI API key:",
        signup_url: "https://aistudio.google.com/apikey",
    },
    ProviderEntry {
        kind: ProviderKind::Proxy,
        label: "LiteLLM / Proxy",
        key_prompt: "Proxy API token:",
        signup_url: "",
    },
];

pub fn entry(kind: ProviderKind) -> &'static ProviderEntry {
    PROVIDERS
        .iter()
        .find(|e| e.kind == kind)
        .unwrap_or(&PROVIDERS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_order_matches_numeric_choices() {
        for (i, e) in PROVIDERS.iter().enumerate() {
            let digit = (i + 1).to_string();
            assert_eq!(ProviderKind::from_choice(&digit), e.kind);
        }
    }

    #[test]
    fn every_kind_has_an_entry() {
        for kind in [
            ProviderKind::Anthropic,
            ProviderKind::OpenAi,
            ProviderKind::Google,
            ProviderKind::Proxy,
        ] {
            assert_eq!(entry(kind).kind, kind);
        }
    }
}
