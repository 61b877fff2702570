use serde::{Deserialize, Serialize};

/// Province record, as shipped in `provinces.json`.
///
/// Only `code` and `name_with_type` are required; the remaining fields are
/// carried when the dataset provides them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub code: String,
    pub name_with_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl Province {
    pub fn new(code: impl Into<String>, name_with_type: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name_with_type: name_with_type.into(),
            name: String::new(),
            slug: String::new(),
            kind: String::new(),
        }
    }
}

/// Ward record, as shipped in `wards.json`.
///
/// `parent_code` references a [`Province::code`]. A ward whose parent does not
/// exist is never offered for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ward {
    pub code: String,
    pub parent_code: String,
    pub name_with_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub path_with_type: String,
}

impl Ward {
    pub fn new(
        code: impl Into<String>,
        parent_code: impl Into<String>,
        name_with_type: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            parent_code: parent_code.into(),
            name_with_type: name_with_type.into(),
            name: String::new(),
            slug: String::new(),
            kind: String::new(),
            path: String::new(),
            path_with_type: String::new(),
        }
    }
}
