//! Form payloads and the view model of the edit page.

use serde::{Deserialize, Serialize};

use templar_types::{format_tags, Template, TemplateDraft};

/// Fields posted by the create and edit forms.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TemplateForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Comma-separated.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub code: String,
}

impl TemplateForm {
    pub fn to_draft(&self) -> TemplateDraft {
        TemplateDraft::from_input(&self.name, &self.description, &self.tags, &self.code)
    }
}

/// `?q=` on the index page.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct IndexQuery {
    #[serde(default)]
    pub q: String,
}

/// Everything `edit.html` needs, for both the create and the edit flow.
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct EditPage {
    /// `None` on the create form.
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub tags: String,
    pub code: String,
    pub error: Option<String>,
}

impl EditPage {
    /// An empty create form.
    pub fn blank() -> Self {
        Self::default()
    }

    /// The edit form pre-filled from a stored record.
    pub fn from_template(template: &Template) -> Self {
        Self {
            id: Some(template.id.clone()),
            name: template.name.clone(),
            description: template.description.clone(),
            tags: format_tags(&template.tags),
            code: template.code.clone(),
            error: None,
        }
    }

    /// The create form re-displaying what the user submitted.
    pub fn from_form(form: &TemplateForm) -> Self {
        Self {
            id: None,
            name: form.name.clone(),
            description: form.description.clone(),
            tags: form.tags.clone(),
            code: form.code.clone(),
            error: None,
        }
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_draft_parses_tags_and_trims() {
        let form = TemplateForm {
            name: "  Report ".into(),
            description: " monthly ".into(),
            tags: "a, ,b".into(),
            code: " x ".into(),
        };
        let draft = form.to_draft();
        assert_eq!(draft.name, "Report");
        assert_eq!(draft.description, "monthly");
        assert_eq!(draft.tags, vec!["a", "b"]);
        assert_eq!(draft.code, " x ");
    }

    #[test]
    fn edit_page_formats_tags_for_input() {
        let t = Template {
            id: "r".into(),
            name: "R".into(),
            description: String::new(),
            tags: vec!["x".into(), "y".into()],
            code: String::new(),
        };
        let page = EditPage::from_template(&t);
        assert_eq!(page.tags, "x, y");
        assert_eq!(page.id.as_deref(), Some("r"));
    }

    #[test]
    fn rejected_create_keeps_submission() {
        let form = TemplateForm {
            name: " ".into(),
            description: "d".into(),
            tags: "a,b".into(),
            code: "c".into(),
        };
        let page = EditPage::from_form(&form).with_error("Name cannot be empty");
        assert!(page.id.is_none());
        assert_eq!(page.tags, "a,b");
        assert_eq!(page.error.as_deref(), Some("Name cannot be empty"));
    }
}
