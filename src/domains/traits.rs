use super::list::DomainList;
use anyhow::Result;

/// Checks a single email address against a set of disposable domains.
pub trait DomainMatcher: Send + Sync {
    /// Returns the first domain (in list order) the email matches.
    fn matching_domain(&self, email: &str) -> Option<&str>;
}

/// Supplies the current disposable-domain list to a sweep.
pub trait DomainProvider: Send + Sync {
    fn domains(&self) -> Result<DomainList>;
}
