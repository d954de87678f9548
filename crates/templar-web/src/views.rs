//! Page rendering with templates compiled into the binary.

use minijinja::{context, Environment};

use templar_types::TemplateSummary;

use crate::error::WebError;
use crate::forms::EditPage;

const PAGES: [(&str, &str); 3] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("edit.html", include_str!("../templates/edit.html")),
];

/// The compiled page set. `.html` names are auto-escaped.
#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Compiles the built-in pages.
    ///
    /// # Errors
    ///
    /// Returns `WebError::Render` if a page has invalid syntax.
    pub fn new() -> Result<Self, WebError> {
        let mut env = Environment::new();
        for (name, source) in PAGES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub(crate) fn index(&self, items: &[TemplateSummary], q: &str) -> Result<String, WebError> {
        let page = self.env.get_template("index.html")?;
        Ok(page.render(context!(items => items, q => q))?)
    }

    pub(crate) fn edit(&self, page: &EditPage) -> Result<String, WebError> {
        let tmpl = self.env.get_template("edit.html")?;
        Ok(tmpl.render(context!(page => page))?)
    }
}
