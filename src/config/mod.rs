mod manager;

pub use manager::{
    ADVICE_PROVIDER, ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_MODEL,
    GEMINI_PROVIDER, MYMEMORY_PROVIDER, ProviderConfig, QuotesConfig, ResolveOptions,
    ResolvedConfig, load_resolved, resolve_config,
};
