//! The temp-mail cleaner plugin: one admin page under the users menu, two
//! plugin-listing links and an activation hook that primes the domain cache.

use crate::config::PluginConfig;
use crate::domains::DomainCache;
use crate::host::{
    ActionLink, AdminPage, PageHandler, PageRequest, PageView, PluginHost, PluginInfo,
    RequestMethod,
};
use crate::sweeper::UserSweeper;
use std::sync::Arc;
use tracing::{error, info};

pub const SUCCESS_MESSAGE: &str = "Users with temp-mail domains successfully removed.";
pub const SUBMIT_LABEL: &str = "Remove Users";
const INTRO: &str =
    "Click the button below to remove users with temp-mail domains from your website.";
const DESCRIPTION: &str = "Delete registered users with temp-mail in your website.";

pub struct TempMailCleaner {
    config: PluginConfig,
    domains: Arc<DomainCache>,
    sweeper: Arc<UserSweeper>,
}

impl TempMailCleaner {
    pub fn new(config: PluginConfig, domains: Arc<DomainCache>, sweeper: Arc<UserSweeper>) -> Self {
        Self {
            config,
            domains,
            sweeper,
        }
    }

    pub fn info(&self) -> PluginInfo {
        PluginInfo {
            name: self.config.name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: DESCRIPTION.to_string(),
        }
    }

    pub fn admin_page(&self) -> AdminPage {
        AdminPage {
            parent: self.config.menu_parent.clone(),
            slug: self.config.slug.clone(),
            page_title: self.config.name.clone(),
            menu_title: self.config.name.clone(),
            capability: self.config.capability.clone(),
        }
    }

    pub fn register(&self, host: &mut dyn PluginHost) {
        let page = self.admin_page();
        let settings_url = host.admin_url(&page.path());

        host.register_page(
            page,
            Arc::new(CleanerPage {
                title: self.config.name.clone(),
                sweeper: Arc::clone(&self.sweeper),
            }),
        );

        // Each filter prepends, so the last registered link shows first
        let project = ActionLink::new("GitHub", self.config.project_url.clone()).in_new_tab();
        host.add_action_links(Box::new(move |links| prepend(links, project.clone())));

        let settings = ActionLink::new("Settings", settings_url);
        host.add_action_links(Box::new(move |links| prepend(links, settings.clone())));

        let domains = Arc::clone(&self.domains);
        host.on_activate(Box::new(move || -> anyhow::Result<()> {
            let primed = domains.get_domains()?;
            info!("Domain cache primed with {} entries", primed.len());
            Ok(())
        }));
    }
}

fn prepend(mut links: Vec<ActionLink>, link: ActionLink) -> Vec<ActionLink> {
    links.insert(0, link);
    links
}

struct CleanerPage {
    title: String,
    sweeper: Arc<UserSweeper>,
}

#[async_trait::async_trait]
impl PageHandler for CleanerPage {
    async fn handle(&self, request: PageRequest) -> PageView {
        let view = PageView::new(&self.title)
            .paragraph(INTRO)
            .form(SUBMIT_LABEL);

        if request.method != RequestMethod::Post {
            return view;
        }

        let sweeper = Arc::clone(&self.sweeper);
        match tokio::task::spawn_blocking(move || sweeper.sweep()).await {
            Ok(Ok(report)) => info!(
                "Manual sweep removed {} of {} users",
                report.deleted, report.scanned
            ),
            Ok(Err(e)) => error!("Manual sweep failed: {:#}", e),
            Err(e) => error!("Manual sweep task aborted: {}", e),
        }

        // The confirmation is shown whatever the outcome
        view.notice(SUCCESS_MESSAGE)
    }
}
