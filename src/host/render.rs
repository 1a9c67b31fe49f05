//! Server-side rendering of admin pages with Tera.
//!
//! Templates ship in `ui/` and are embedded into the binary. Every `.html`
//! template is autoescaped, so values from page handlers and config are
//! always inserted as text.

use super::types::{ActionLink, AdminPage, PageView, PluginInfo};
use anyhow::{anyhow, Context as _, Result};
use rust_embed::RustEmbed;
use serde::Serialize;
use std::collections::BTreeMap;
use tera::{Context, Tera};

#[derive(RustEmbed)]
#[folder = "ui/"]
pub(super) struct Asset;

// The layout must be registered before the templates extending it
const TPL_LAYOUT: &str = "admin.html";
const TPL_PAGE: &str = "page.html";
const TPL_DASHBOARD: &str = "dashboard.html";

#[derive(Debug, Serialize)]
pub(super) struct MenuSection<'a> {
    parent: &'a str,
    entries: Vec<MenuEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct MenuEntry<'a> {
    title: &'a str,
    url: String,
    capability: &'a str,
}

/// Sidebar entries grouped by parent section.
pub(super) fn menu_sections<'a>(
    pages: impl IntoIterator<Item = &'a AdminPage>,
    admin_url: impl Fn(&AdminPage) -> String,
) -> Vec<MenuSection<'a>> {
    let mut sections: BTreeMap<&str, Vec<MenuEntry<'a>>> = BTreeMap::new();
    for page in pages {
        sections
            .entry(page.parent.as_str())
            .or_default()
            .push(MenuEntry {
                title: &page.menu_title,
                url: admin_url(page),
                capability: &page.capability,
            });
    }

    sections
        .into_iter()
        .map(|(parent, entries)| MenuSection { parent, entries })
        .collect()
}

pub(super) struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub(super) fn new() -> Result<Self> {
        let mut tera = Tera::default();
        for name in [TPL_LAYOUT, TPL_PAGE, TPL_DASHBOARD] {
            let file =
                Asset::get(name).ok_or_else(|| anyhow!("Missing embedded template {name}"))?;
            let source = std::str::from_utf8(&file.data)
                .with_context(|| format!("Template {name} is not UTF-8"))?;
            tera.add_raw_template(name, source)
                .with_context(|| format!("Failed to parse template {name}"))?;
        }
        Ok(Self { tera })
    }

    /// A registered page: heading, paragraphs, the form, then notices.
    pub(super) fn page(
        &self,
        page_title: &str,
        view: &PageView,
        menu: &[MenuSection<'_>],
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("page_title", page_title);
        context.insert("menu", menu);
        context.insert("view", view);
        self.render(TPL_PAGE, &context)
    }

    pub(super) fn dashboard(
        &self,
        plugin: &PluginInfo,
        action_links: &[ActionLink],
        menu: &[MenuSection<'_>],
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("menu", menu);
        context.insert("plugin", plugin);
        context.insert("action_links", action_links);
        self.render(TPL_DASHBOARD, &context)
    }

    fn render(&self, template: &str, context: &Context) -> Result<String> {
        self.tera
            .render(template, context)
            .with_context(|| format!("Failed to render {template}"))
    }
}
