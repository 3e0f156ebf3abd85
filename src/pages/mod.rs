//! Context drawer and dialog page types

pub mod preview;

use crate::api::AppDraft;
use crate::record::AppRecord;

/// Context page for the context drawer
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContextPage {
    Preview,
    Settings,
}

/// Dialog page types
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DialogPage {
    AppForm(FormState),
    DeleteConfirm { id: String, name: String },
}

/// Create/edit form state; `id` is set when editing an existing record
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormState {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub template_body: String,
}

impl FormState {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(record: &AppRecord) -> Self {
        Self {
            id: Some(record.id.clone()),
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
            template_body: record.template_body.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn draft(&self) -> AppDraft {
        AppDraft {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            template_body: self.template_body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_form_is_prefilled_from_record() {
        let record = AppRecord {
            id: "a1".to_string(),
            name: "App One".to_string(),
            description: Some("sends mail".to_string()),
            template_body: Some("<p>hi</p>".to_string()),
            ..Default::default()
        };
        let form = FormState::edit(&record);
        assert!(form.is_edit());
        assert_eq!(form.name, "App One");
        assert_eq!(form.description, "sends mail");
        assert_eq!(form.template_body, "<p>hi</p>");
    }

    #[test]
    fn blank_name_is_invalid() {
        let mut form = FormState::create();
        assert!(!form.is_edit());
        assert!(!form.is_valid());
        form.name = "  ".to_string();
        assert!(!form.is_valid());
        form.name = " Notifier ".to_string();
        assert!(form.is_valid());
        assert_eq!(form.draft().name, "Notifier");
    }
}
