use super::list::DomainList;
use super::traits::DomainMatcher;

/// Literal `"@" + domain` substring matcher.
///
/// This is deliberately not suffix matching: `carol@sub.tempmail.com` does
/// not contain `@tempmail.com`, so it is not matched by `tempmail.com`.
#[derive(Debug)]
pub struct SubstringMatcher {
    // "@domain", kept in list order
    needles: Vec<String>,
}

impl SubstringMatcher {
    pub fn new(domains: &DomainList) -> Self {
        Self {
            needles: domains.iter().map(|domain| format!("@{domain}")).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.needles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }
}

impl DomainMatcher for SubstringMatcher {
    fn matching_domain(&self, email: &str) -> Option<&str> {
        self.needles
            .iter()
            .find(|needle| email.contains(needle.as_str()))
            .map(|needle| &needle[1..])
    }
}
