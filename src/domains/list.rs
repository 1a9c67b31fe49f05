use serde::{Deserialize, Serialize};

/// Ordered disposable-mail domains, trimmed and without empty entries.
///
/// Stored in the option store as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainList(Vec<String>);

impl DomainList {
    pub fn new(domains: Vec<String>) -> Self {
        Self(domains)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for DomainList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_array() {
        let list: DomainList = ["tempmail.com", "yopmail.com"].into_iter().collect();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["tempmail.com","yopmail.com"]"#);

        let back: DomainList = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_slice(), ["tempmail.com", "yopmail.com"]);
    }
}
