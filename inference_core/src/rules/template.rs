//! Text templates with `{slot}` placeholders.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use state_model::{Assignment, Value};

static SLOT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("slot pattern is valid"));

/// A string in which `{name}` slots are filled from an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    raw: String,
    slots: BTreeSet<String>,
}

impl Template {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into().trim().to_string();
        let slots = SLOT_PATTERN
            .captures_iter(&raw)
            .map(|caps| caps[1].trim().to_string())
            .collect();
        Self { raw, slots }
    }

    /// Get the names of the slots in the template.
    pub fn slots(&self) -> &BTreeSet<String> {
        &self.slots
    }

    /// Check if the template still has slots to fill.
    pub fn is_under_specified(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Replace every slot bound in `input` by its value.
    /// Slots without a binding are left as they are.
    pub fn fill(&self, input: &Assignment) -> Template {
        if !self.is_under_specified() {
            return self.clone();
        }
        let filled = SLOT_PATTERN.replace_all(&self.raw, |caps: &regex::Captures<'_>| {
            match input.value(caps[1].trim()) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        });
        Template::new(filled.into_owned())
    }

    /// Get the raw text of the template.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parse the text of the template as a value.
    pub fn to_value(&self) -> Value {
        Value::parse(&self.raw)
    }
}

impl From<&str> for Template {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Template {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
