use serde::Serialize;

/// A page registered under one of the host's admin menu sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPage {
    /// Parent menu entry, e.g. `users.php`.
    pub parent: String,
    pub slug: String,
    pub page_title: String,
    pub menu_title: String,
    pub capability: String,
}

impl AdminPage {
    /// Path relative to the admin root, e.g. `users.php?page=my-plugin`.
    pub fn path(&self) -> String {
        format!("{}?page={}", self.parent, self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLink {
    pub label: String,
    pub href: String,
    pub new_tab: bool,
}

impl ActionLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            new_tab: false,
        }
    }

    pub fn in_new_tab(mut self) -> Self {
        self.new_tab = true;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub method: RequestMethod,
}

/// A single-button form posting back to the page it is rendered on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub submit_label: String,
}

/// What a page handler wants shown; the host turns it into markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub form: Option<FormView>,
    /// Rendered after the form.
    pub notices: Vec<String>,
}

impl PageView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    pub fn form(mut self, submit_label: impl Into<String>) -> Self {
        self.form = Some(FormView {
            submit_label: submit_label.into(),
        });
        self
    }

    pub fn notice(mut self, text: impl Into<String>) -> Self {
        self.notices.push(text.into());
        self
    }
}

/// Rewrites a plugin row's action links. Filters run in registration order.
pub type ActionLinkFilter = Box<dyn Fn(Vec<ActionLink>) -> Vec<ActionLink> + Send + Sync>;

pub type ActivationHook = Box<dyn FnOnce() -> anyhow::Result<()> + Send>;
