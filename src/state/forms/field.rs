//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one of the fixed lead form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    CompanyName,
    Consent,
}

impl FieldId {
    /// Every field, in display order
    pub const ALL: [FieldId; 5] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::CompanyName,
        FieldId::Consent,
    ];

    /// Wire identifier used in the submitted record
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::FullName => "full_name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::CompanyName => "company_name",
            FieldId::Consent => "consent",
        }
    }

    /// Static description of this field
    pub fn spec(&self) -> FieldSpec {
        match self {
            FieldId::FullName => FieldSpec::new(*self, "Full Name", FieldKind::Text),
            FieldId::Email => FieldSpec::new(*self, "Email", FieldKind::Email),
            FieldId::Phone => FieldSpec::new(*self, "Phone", FieldKind::Phone),
            FieldId::CompanyName => FieldSpec::new(*self, "Company Name", FieldKind::Text),
            FieldId::Consent => FieldSpec::new(
                *self,
                "I agree to the collection and use of my personal data",
                FieldKind::Checkbox,
            ),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input kind, which decides the checks a field receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Checkbox,
}

/// Design-time description of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(id: FieldId, label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            required: true,
            kind,
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

/// A single form field with its static description and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: FieldValue,
}

impl FormField {
    /// Create an empty field for the given id
    pub fn new(id: FieldId) -> Self {
        let spec = id.spec();
        let value = match spec.kind {
            FieldKind::Checkbox => FieldValue::Checked(false),
            _ => FieldValue::Text(String::new()),
        };
        Self { spec, value }
    }

    pub fn id(&self) -> FieldId {
        self.spec.id
    }

    pub fn label(&self) -> &'static str {
        self.spec.label
    }

    /// Get the text value (empty for checkboxes)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Checked(_) => "",
        }
    }

    /// Whether a checkbox is ticked (false for text fields)
    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checked(true))
    }

    /// Set the text value, ignored for checkboxes
    pub fn set_text(&mut self, value: impl Into<String>) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value.into();
        }
    }

    #[cfg(test)]
    pub fn set_checked(&mut self, checked: bool) {
        if let FieldValue::Checked(c) = &mut self.value {
            *c = checked;
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Checked(checked) => {
                if c == ' ' {
                    *checked = !*checked;
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Checked(c) => *c = false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Checked(true) => "[x]".to_string(),
            FieldValue::Checked(false) => "[ ]".to_string(),
        }
    }
}
