//! Custom serde helpers for CoinGecko wire formats.

/// Deserializes a field that may be `null` into its `Default`.
///
/// CoinGecko sends `null` for many link and supply fields instead of omitting
/// them, which `#[serde(default)]` alone does not cover.
pub mod null_as_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Deserializes a list of possibly-null strings, dropping the nulls.
pub mod lossy_string_vec {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
        Ok(raw.unwrap_or_default().into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::null_as_default::deserialize")]
        name: String,
        #[serde(default, deserialize_with = "super::lossy_string_vec::deserialize")]
        links: Vec<String>,
    }

    #[test]
    fn test_null_becomes_default() {
        let p: Probe = serde_json::from_str(r#"{"name":null,"links":null}"#).unwrap();
        assert_eq!(p.name, "");
        assert!(p.links.is_empty());
    }

    #[test]
    fn test_missing_becomes_default() {
        let p: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(p.name, "");
        assert!(p.links.is_empty());
    }

    #[test]
    fn test_null_entries_dropped() {
        let p: Probe =
            serde_json::from_str(r#"{"name":"x","links":["a",null,"b"]}"#).unwrap();
        assert_eq!(p.links, vec!["a", "b"]);
    }
}
