//! One full pass over the user directory, deleting every account whose email
//! matches a disposable domain.

use crate::domains::{DomainMatcher, DomainProvider, SubstringMatcher};
use crate::store::UserDirectory;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub scanned: u64,
    pub matched: u64,
    pub deleted: u64,
    /// Matched users that were already gone at delete time.
    pub missing: u64,
    pub failed: u64,
}

pub struct UserSweeper {
    domains: Arc<dyn DomainProvider>,
    users: Arc<dyn UserDirectory>,
}

impl UserSweeper {
    pub fn new(domains: Arc<dyn DomainProvider>, users: Arc<dyn UserDirectory>) -> Self {
        Self { domains, users }
    }

    /// Runs to completion. Delete failures are counted, not fatal, and nothing
    /// already deleted is rolled back.
    pub fn sweep(&self) -> Result<SweepReport> {
        let started = Instant::now();
        let domains = self
            .domains
            .domains()
            .context("Failed to load disposable domain list")?;
        let matcher = SubstringMatcher::new(&domains);
        let users = self.users.list_users().context("Failed to list users")?;

        info!(
            "Sweeping {} users against {} disposable domains",
            users.len(),
            matcher.len()
        );

        let mut report = SweepReport::default();
        for user in &users {
            report.scanned += 1;

            let Some(domain) = matcher.matching_domain(&user.email) else {
                continue;
            };
            report.matched += 1;

            match self.users.delete_user(user.id) {
                Ok(true) => {
                    report.deleted += 1;
                    debug!(
                        "Deleted user {} ({}) matching @{}",
                        user.id, user.login, domain
                    );
                }
                Ok(false) => {
                    report.missing += 1;
                    warn!("User {} ({}) was already deleted", user.id, user.login);
                }
                Err(e) => {
                    report.failed += 1;
                    error!("Failed to delete user {} ({}): {:#}", user.id, user.login, e);
                }
            }
        }

        info!(
            "Sweep complete in {}ms. Scanned: {}, Deleted: {}, Missing: {}, Failed: {}",
            started.elapsed().as_millis(),
            report.scanned,
            report.deleted,
            report.missing,
            report.failed
        );
        Ok(report)
    }
}
