use crate::ConfigError;
use std::env::{var, VarError};
use std::str::FromStr;

/// Reads a variable through `lookup`, falling back to `default` when it is unset or blank.
pub fn lookup_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

pub fn lookup_required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::EnvVarError(VarError::NotPresent, key.to_owned()))
}

pub fn lookup_parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T, T::Err>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key).map(|value| value.trim().to_owned()) {
        Some(value) if !value.is_empty() => value.parse(),
        _ => Ok(default),
    }
}

/// Lookup backed by the process environment.
pub fn env_lookup(key: &str) -> Option<String> {
    var(key).ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_lookup_or_falls_back_on_blank() {
        let lookup = lookup_from(&[("SET", " value "), ("BLANK", "   ")]);
        assert_eq!(lookup_or(&lookup, "SET", "default"), "value");
        assert_eq!(lookup_or(&lookup, "BLANK", "default"), "default");
        assert_eq!(lookup_or(&lookup, "UNSET", "default"), "default");
    }

    #[test]
    fn test_lookup_required_names_variable() {
        let lookup = lookup_from(&[]);
        let error = lookup_required(&lookup, "OPENAI_API_KEY").unwrap_err();
        assert!(error.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_lookup_parsed() {
        let lookup = lookup_from(&[("PORT", "8080"), ("BAD", "eighty")]);
        assert_eq!(lookup_parsed(&lookup, "PORT", 3000u16).unwrap(), 8080);
        assert_eq!(lookup_parsed(&lookup, "UNSET", 3000u16).unwrap(), 3000);
        assert!(lookup_parsed(&lookup, "BAD", 3000u16).is_err());
    }
}
