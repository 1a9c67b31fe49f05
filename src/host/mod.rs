//! Host-side plumbing for plugins: page registration, plugin-listing links and
//! activation hooks, plus the axum admin server that renders them.

mod render;
mod server;
mod traits;
mod types;

pub use server::{serve, AdminServer, ADMIN_PREFIX};
pub use traits::{PageHandler, PluginHost};
pub use types::{
    ActionLink, ActionLinkFilter, ActivationHook, AdminPage, FormView, PageRequest, PageView,
    PluginInfo, RequestMethod,
};
