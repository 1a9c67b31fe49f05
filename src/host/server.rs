use super::render::{menu_sections, Asset, MenuSection, Renderer};
use super::traits::{PageHandler, PluginHost};
use super::types::{
    ActionLink, ActionLinkFilter, ActivationHook, AdminPage, PageRequest, PluginInfo,
    RequestMethod,
};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::{header, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

pub const ADMIN_PREFIX: &str = "/admin";

struct RegisteredPage {
    page: AdminPage,
    handler: Arc<dyn PageHandler>,
}

/// Collects plugin registrations and serves them over HTTP.
pub struct AdminServer {
    plugin: PluginInfo,
    pages: Vec<RegisteredPage>,
    link_filters: Vec<ActionLinkFilter>,
    activation_hooks: Vec<ActivationHook>,
}

impl AdminServer {
    pub fn new(plugin: PluginInfo) -> Self {
        Self {
            plugin,
            pages: Vec::new(),
            link_filters: Vec::new(),
            activation_hooks: Vec::new(),
        }
    }

    pub fn pages(&self) -> impl Iterator<Item = &AdminPage> {
        self.pages.iter().map(|entry| &entry.page)
    }

    /// Runs pending activation hooks once, in registration order.
    pub fn activate(&mut self) -> Result<()> {
        info!("Activating plugin '{}'", self.plugin.name);
        for hook in self.activation_hooks.drain(..) {
            hook()?;
        }
        Ok(())
    }

    /// The plugin row's action links after every registered filter.
    pub fn action_links(&self) -> Vec<ActionLink> {
        self.link_filters
            .iter()
            .fold(Vec::new(), |links, filter| filter(links))
    }

    pub fn router(self) -> Result<Router> {
        let action_links = self.action_links();
        let state = Arc::new(HostState {
            plugin: self.plugin,
            pages: self.pages,
            action_links,
            renderer: Renderer::new().context("Failed to load admin templates")?,
        });

        Ok(Router::new()
            .route("/", get(|| async { Redirect::to(ADMIN_PREFIX) }))
            .route(ADMIN_PREFIX, get(dashboard))
            .route("/admin/:parent", get(admin_page).post(admin_page))
            .route("/api/plugins", get(plugin_row))
            .fallback(static_handler)
            .with_state(state))
    }
}

impl PluginHost for AdminServer {
    fn admin_url(&self, path: &str) -> String {
        format!("{ADMIN_PREFIX}/{path}")
    }

    fn register_page(&mut self, page: AdminPage, handler: Arc<dyn PageHandler>) {
        info!("Registered admin page {}", page.path());
        self.pages.push(RegisteredPage { page, handler });
    }

    fn add_action_links(&mut self, filter: ActionLinkFilter) {
        self.link_filters.push(filter);
    }

    fn on_activate(&mut self, hook: ActivationHook) {
        self.activation_hooks.push(hook);
    }
}

pub async fn serve(router: Router, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind admin server to {addr}"))?;
    info!("Admin server listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Admin server failed")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received."),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}

struct HostState {
    plugin: PluginInfo,
    pages: Vec<RegisteredPage>,
    action_links: Vec<ActionLink>,
    renderer: Renderer,
}

impl HostState {
    fn menu(&self) -> Vec<MenuSection<'_>> {
        menu_sections(self.pages.iter().map(|entry| &entry.page), |page| {
            format!("{ADMIN_PREFIX}/{}", page.path())
        })
    }
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<String>,
}

#[derive(Serialize)]
struct PluginRow<'a> {
    #[serde(flatten)]
    plugin: &'a PluginInfo,
    action_links: &'a [ActionLink],
}

async fn dashboard(State(state): State<Arc<HostState>>) -> Response {
    respond(
        state
            .renderer
            .dashboard(&state.plugin, &state.action_links, &state.menu()),
    )
}

async fn admin_page(
    State(state): State<Arc<HostState>>,
    Path(parent): Path<String>,
    Query(query): Query<PageQuery>,
    method: Method,
) -> Response {
    let Some(slug) = query.page else {
        return not_found();
    };
    let Some(entry) = state
        .pages
        .iter()
        .find(|entry| entry.page.parent == parent && entry.page.slug == slug)
    else {
        return not_found();
    };

    let method = if method == Method::POST {
        RequestMethod::Post
    } else {
        RequestMethod::Get
    };
    let view = entry.handler.handle(PageRequest { method }).await;
    respond(
        state
            .renderer
            .page(&entry.page.page_title, &view, &state.menu()),
    )
}

async fn plugin_row(State(state): State<Arc<HostState>>) -> impl IntoResponse {
    let row = PluginRow {
        plugin: &state.plugin,
        action_links: &state.action_links,
    };
    Json(serde_json::json!({ "plugins": [row] }))
}

async fn static_handler(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    // Templates are rendered, never served raw
    if path.ends_with(".html") {
        return not_found();
    }

    match Asset::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => not_found(),
    }
}

fn respond(rendered: Result<String>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render admin page: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error").into_response()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}
