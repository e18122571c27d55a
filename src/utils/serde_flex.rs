use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Int(i) => i.to_string(),
            TextOrNumber::Float(f) => f.to_string(),
            TextOrNumber::Bool(b) => b.to_string(),
        }
    }
}

/// Accepts a string, number, boolean, or null and yields optional text.
pub fn deserialize_text_flexible<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(TextOrNumber::into_text))
}

/// Accepts a non-negative integer or a numeric string. Empty strings and null are absent.
pub fn deserialize_count_flexible<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CountOrText {
        Count(u32),
        Text(String),
    }

    match Option::<CountOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(CountOrText::Count(n)) => Ok(Some(n)),
        Some(CountOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(CountOrText::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("Invalid count: {}", s))),
    }
}

/// Treats an explicit null like a missing field.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_text_flexible")]
        text: Option<String>,
        #[serde(default, deserialize_with = "deserialize_count_flexible")]
        count: Option<u32>,
        #[serde(default, deserialize_with = "deserialize_null_default")]
        list: Vec<String>,
    }

    #[test]
    fn numbers_become_text() {
        let probe: Probe = serde_json::from_str(r#"{"text": 120000}"#).unwrap();
        assert_eq!(probe.text.as_deref(), Some("120000"));
    }

    #[test]
    fn counts_accept_strings_and_numbers() {
        let probe: Probe = serde_json::from_str(r#"{"count": "7"}"#).unwrap();
        assert_eq!(probe.count, Some(7));
        let probe: Probe = serde_json::from_str(r#"{"count": 7}"#).unwrap();
        assert_eq!(probe.count, Some(7));
        let probe: Probe = serde_json::from_str(r#"{"count": ""}"#).unwrap();
        assert_eq!(probe.count, None);
        assert!(serde_json::from_str::<Probe>(r#"{"count": "seven"}"#).is_err());
    }

    #[test]
    fn null_and_missing_are_absent() {
        let probe: Probe = serde_json::from_str(r#"{"text": null, "list": null}"#).unwrap();
        assert_eq!(probe.text, None);
        assert_eq!(probe.count, None);
        assert!(probe.list.is_empty());
    }
}
