//! Engine configuration from the environment.

use std::path::PathBuf;

use crate::conversions::choice_resolver::{ChoiceResolverConfig, DEFAULT_MAX_DEPTH};

pub const RULES_PATH_VAR: &str = "CHARFORGE_RULES_PATH";
pub const CHOICE_STRICT_VAR: &str = "CHARFORGE_CHOICE_STRICT";
pub const CHOICE_MAX_DEPTH_VAR: &str = "CHARFORGE_CHOICE_MAX_DEPTH";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// JSON rules catalog; only the CLI needs it
    pub rules_path: Option<PathBuf>,
    pub choices: ChoiceResolverConfig,
}

impl EngineConfig {
    /// Read configuration from process environment variables.
    ///
    /// Call after `dotenvy` has loaded any `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let rules_path = lookup(RULES_PATH_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let strict = lookup(CHOICE_STRICT_VAR)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let max_depth = match lookup(CHOICE_MAX_DEPTH_VAR) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(depth) => depth.max(1),
                Err(_) => {
                    tracing::warn!(
                        value = %raw,
                        default = DEFAULT_MAX_DEPTH,
                        "Invalid {}, using default", CHOICE_MAX_DEPTH_VAR
                    );
                    DEFAULT_MAX_DEPTH
                }
            },
            None => DEFAULT_MAX_DEPTH,
        };

        Self {
            rules_path,
            choices: ChoiceResolverConfig { strict, max_depth },
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = EngineConfig::from_lookup(|_| None);
        assert!(config.rules_path.is_none());
        assert!(!config.choices.strict);
        assert_eq!(config.choices.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn reads_all_variables() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            (RULES_PATH_VAR, "/data/rules.json"),
            (CHOICE_STRICT_VAR, "Yes"),
            (CHOICE_MAX_DEPTH_VAR, "3"),
        ]));
        assert_eq!(config.rules_path, Some(PathBuf::from("/data/rules.json")));
        assert!(config.choices.strict);
        assert_eq!(config.choices.max_depth, 3);
    }

    #[test]
    fn depth_is_at_least_one_and_garbage_falls_back() {
        let zero = EngineConfig::from_lookup(lookup_from(&[(CHOICE_MAX_DEPTH_VAR, "0")]));
        assert_eq!(zero.choices.max_depth, 1);

        let garbage = EngineConfig::from_lookup(lookup_from(&[(CHOICE_MAX_DEPTH_VAR, "deep")]));
        assert_eq!(garbage.choices.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn unknown_flag_values_are_false() {
        let config = EngineConfig::from_lookup(lookup_from(&[(CHOICE_STRICT_VAR, "on")]));
        assert!(!config.choices.strict);
    }
}
