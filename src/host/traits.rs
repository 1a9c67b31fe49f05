use super::types::{ActionLinkFilter, ActivationHook, AdminPage, PageRequest, PageView};
use std::sync::Arc;

/// Renders one registered admin page.
#[async_trait::async_trait]
pub trait PageHandler: Send + Sync {
    async fn handle(&self, request: PageRequest) -> PageView;
}

/// The capabilities a plugin may register against.
pub trait PluginHost {
    /// Absolute URL of an admin path such as `users.php?page=slug`.
    fn admin_url(&self, path: &str) -> String;

    fn register_page(&mut self, page: AdminPage, handler: Arc<dyn PageHandler>);

    fn add_action_links(&mut self, filter: ActionLinkFilter);

    fn on_activate(&mut self, hook: ActivationHook);
}
