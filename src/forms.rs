//! Client-side form validation.
//!
//! Forms opting into validation check their required fields on submit:
//! any required field whose trimmed value is empty gets the error flag and
//! blocks submission. A fully valid submit collects the field values, shows
//! the success panel, and resets the form. Nothing leaves the page — there
//! is no network request to make.

use serde::{Deserialize, Serialize};

/// Declarative description of one field, as found in the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub required: bool,
}

/// Declarative description of a validating form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormSpec {
    pub fields: Vec<FieldSpec>,
    /// Whether the shell provides a success-message element.
    #[serde(default)]
    pub has_success_panel: bool,
}

/// Live state of one field.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub required: bool,
    /// Error-style marker, set and cleared only by submission attempts.
    pub error: bool,
}

/// What a submission attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one required field was empty; the form is untouched except
    /// for error markers on exactly the offending fields.
    Blocked { invalid: Vec<String> },
    /// All required fields were filled; the values were collected, the form
    /// reset, and the success panel revealed (when the shell has one).
    Accepted { values: Vec<(String, String)> },
}

#[derive(Debug, Clone)]
pub struct Form {
    pub fields: Vec<Field>,
    has_success_panel: bool,
    success_visible: bool,
}

impl Form {
    pub fn new(spec: &FormSpec) -> Form {
        Form {
            fields: spec
                .fields
                .iter()
                .map(|f| Field {
                    name: f.name.clone(),
                    value: String::new(),
                    required: f.required,
                    error: false,
                })
                .collect(),
            has_success_panel: spec.has_success_panel,
            success_visible: false,
        }
    }

    /// Type into a field by name. Unknown names are ignored.
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.to_string();
        }
    }

    /// Attempt submission.
    ///
    /// Required fields are re-marked on every attempt: empties gain the
    /// error flag, non-empties lose it. Optional fields are never marked.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut invalid = Vec::new();
        for field in &mut self.fields {
            if !field.required {
                continue;
            }
            if field.value.trim().is_empty() {
                field.error = true;
                invalid.push(field.name.clone());
            } else {
                field.error = false;
            }
        }

        if !invalid.is_empty() {
            return SubmitOutcome::Blocked { invalid };
        }

        let values: Vec<(String, String)> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();
        if self.has_success_panel {
            self.success_visible = true;
        }
        self.reset();
        SubmitOutcome::Accepted { values }
    }

    /// Clear every field value, like the browser's form reset.
    fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    /// Names of fields currently carrying the error marker.
    pub fn error_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.error)
            .map(|f| f.name.as_str())
            .collect()
    }

    pub fn is_reset(&self) -> bool {
        self.fields.iter().all(|f| f.value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_form() -> Form {
        Form::new(&FormSpec {
            fields: vec![
                FieldSpec {
                    name: "name".to_string(),
                    required: true,
                },
                FieldSpec {
                    name: "email".to_string(),
                    required: true,
                },
                FieldSpec {
                    name: "message".to_string(),
                    required: false,
                },
            ],
            has_success_panel: true,
        })
    }

    #[test]
    fn empty_required_fields_block_submission() {
        let mut form = contact_form();
        form.set_value("name", "Ayesha");
        let outcome = form.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Blocked {
                invalid: vec!["email".to_string()]
            }
        );
        // Only the empty field is marked; the form keeps its values.
        assert_eq!(form.error_fields(), ["email"]);
        assert!(!form.is_reset());
        assert!(!form.success_visible());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = contact_form();
        form.set_value("name", "   ");
        form.set_value("email", "a@b.pk");
        let outcome = form.submit();
        assert!(matches!(outcome, SubmitOutcome::Blocked { .. }));
        assert_eq!(form.error_fields(), ["name"]);
    }

    #[test]
    fn optional_fields_never_block_or_mark() {
        let mut form = contact_form();
        form.set_value("name", "Ayesha");
        form.set_value("email", "a@b.pk");
        // message left empty on purpose
        let outcome = form.submit();
        assert!(matches!(outcome, SubmitOutcome::Accepted { .. }));
        assert!(form.error_fields().is_empty());
    }

    #[test]
    fn valid_submit_collects_resets_and_reveals_success() {
        let mut form = contact_form();
        form.set_value("name", "Ayesha");
        form.set_value("email", "a@b.pk");
        form.set_value("message", "Salaam");
        let outcome = form.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                values: vec![
                    ("name".to_string(), "Ayesha".to_string()),
                    ("email".to_string(), "a@b.pk".to_string()),
                    ("message".to_string(), "Salaam".to_string()),
                ]
            }
        );
        assert!(form.is_reset());
        assert!(form.success_visible());
    }

    #[test]
    fn error_marker_clears_on_corrected_resubmit() {
        let mut form = contact_form();
        form.submit();
        assert_eq!(form.error_fields(), ["name", "email"]);
        form.set_value("name", "Bilal");
        form.set_value("email", "b@c.pk");
        form.submit();
        assert!(form.error_fields().is_empty());
    }

    #[test]
    fn missing_success_panel_is_tolerated() {
        let mut form = Form::new(&FormSpec {
            fields: vec![FieldSpec {
                name: "q".to_string(),
                required: true,
            }],
            has_success_panel: false,
        });
        form.set_value("q", "hello");
        assert!(matches!(form.submit(), SubmitOutcome::Accepted { .. }));
        assert!(!form.success_visible());
    }

    #[test]
    fn unknown_field_name_ignored() {
        let mut form = contact_form();
        form.set_value("no-such-field", "x");
        assert!(form.is_reset());
    }
}
