/// One canonical provider: display name, chart color, logo filename.
#[derive(Debug, Clone, Copy)]
pub struct Provider {
    pub name: &'static str,
    pub color: &'static str,
    pub logo: Option<&'static str>,
}

/// Canonical provider registry. Lookups are case-insensitive; providers
/// absent from this table keep their reported name and fall back to the
/// default visual style.
pub const PROVIDERS: &[Provider] = &[
    Provider {
        name: "Google",
        color: "#4DB6AC",
        logo: Some("deepmind.png"),
    },
    Provider {
        name: "OpenAI",
        color: "#F48FB1",
        logo: Some("openai.png"),
    },
    Provider {
        name: "Meta",
        color: "#FFAB91",
        logo: Some("meta.png"),
    },
    Provider {
        name: "Anthropic",
        color: "#B39DDB",
        logo: Some("anthropic.png"),
    },
    Provider {
        name: "Claude",
        color: "#B39DDB",
        logo: Some("anthropic.png"),
    },
    Provider {
        name: "Grok",
        color: "#5C6BC0",
        logo: Some("xai.png"),
    },
    Provider {
        name: "Qwen",
        color: "#81C784",
        logo: Some("qwen.png"),
    },
    Provider {
        name: "Mistral",
        color: "#FF8A65",
        logo: Some("mistral.png"),
    },
    Provider {
        name: "NetoAI",
        color: "#4DD0E1",
        logo: Some("NetoAI-logo.png"),
    },
    Provider {
        name: "IBM",
        color: "#64B5F6",
        logo: Some("ibm.png"),
    },
    Provider {
        name: "IBM Granite",
        color: "#64B5F6",
        logo: Some("ibm.png"),
    },
    Provider {
        name: "DeepSeek",
        color: "#CE93D8",
        logo: Some("deepseek.png"),
    },
    Provider {
        name: "LiquidAI",
        color: "#FFB74D",
        logo: Some("liquidai.png"),
    },
    Provider {
        name: "Microsoft",
        color: "#4FC3F7",
        logo: Some("microsoft.png"),
    },
    Provider {
        name: "Swiss AI",
        color: "#E57373",
        logo: None,
    },
    Provider {
        name: "ByteDance",
        color: "#AED581",
        logo: Some("bytedance.png"),
    },
    Provider {
        name: "Amazon",
        color: "#FF9800",
        logo: Some("amazon.png"),
    },
    Provider {
        name: "NVIDIA",
        color: "#76B900",
        logo: Some("nvidia.png"),
    },
    Provider {
        name: "Cohere",
        color: "#FF6B6B",
        logo: Some("cohere.png"),
    },
    Provider {
        name: "Hugging Face",
        color: "#FFD54F",
        logo: Some("huggingface.png"),
    },
];

/// Color used for providers outside the registry.
pub const FALLBACK_COLOR: &str = "#A1887F";

/// Sentinel provider name for rows without a parenthesized provider.
pub const UNKNOWN_PROVIDER: &str = "Unknown";

fn find(raw: &str) -> Option<&'static Provider> {
    PROVIDERS
        .iter()
        .find(|provider| provider.name.eq_ignore_ascii_case(raw))
}

/// Canonicalize a reported provider name. Known providers get the registry
/// casing; unknown providers pass through trimmed, not rewritten.
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    match find(trimmed) {
        Some(provider) => provider.name.to_string(),
        None => trimmed.to_string(),
    }
}

pub fn color(name: &str) -> &'static str {
    find(name).map(|provider| provider.color).unwrap_or(FALLBACK_COLOR)
}

pub fn logo(name: &str) -> Option<&'static str> {
    find(name).and_then(|provider| provider.logo)
}
