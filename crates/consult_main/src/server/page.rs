use anyhow::{Context as _, Result};
use consult_domain::ExpertRole;
use handlebars::Handlebars;
use rust_embed::Embed;
use serde::Serialize;

#[derive(Embed)]
#[folder = "templates/"]
struct TemplateSource;

const INDEX_TEMPLATE: &str = "index.hbs";

#[derive(Debug, Serialize, PartialEq)]
struct RoleOption {
    id: String,
    label: &'static str,
    selected: bool,
}

/// Everything the consultation page shows for one request.
#[derive(Debug, Serialize)]
pub struct PageView {
    roles: Vec<RoleOption>,
    text: String,
    warning: Option<String>,
    answer: Option<String>,
    answered: bool,
    error: Option<String>,
    model: String,
}

impl PageView {
    /// An empty form with the first role preselected.
    pub fn new(model: impl ToString) -> Self {
        Self {
            roles: Vec::new(),
            text: String::new(),
            warning: None,
            answer: None,
            answered: false,
            error: None,
            model: model.to_string(),
        }
        .selected(ExpertRole::selectable()[0])
    }

    /// Marks `role` as checked. A role outside the selectable set leaves
    /// nothing checked.
    pub fn selected(mut self, role: ExpertRole) -> Self {
        self.roles = ExpertRole::selectable()
            .into_iter()
            .map(|option| RoleOption {
                id: option.to_string(),
                label: option.label(),
                selected: option == role,
            })
            .collect();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self.answered = true;
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Renders the embedded handlebars templates.
pub struct Page {
    hb: Handlebars<'static>,
}

impl Page {
    pub fn new() -> Result<Self> {
        let mut hb = Handlebars::new();
        hb.set_strict_mode(true);

        for name in TemplateSource::iter() {
            let file = TemplateSource::get(&name)
                .with_context(|| format!("Embedded template {name} disappeared"))?;
            let source = std::str::from_utf8(file.data.as_ref())
                .with_context(|| format!("Template {name} is not valid UTF-8"))?;
            hb.register_template_string(&name, source)
                .with_context(|| format!("Failed to register template {name}"))?;
        }

        Ok(Self { hb })
    }

    pub fn render(&self, view: &PageView) -> Result<String> {
        self.hb
            .render(INDEX_TEMPLATE, view)
            .context("Failed to render consultation page")
    }
}
