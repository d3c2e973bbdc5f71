mod css_rules;
mod form;

pub use css_rules::CssRules;
pub use form::ServiceForm;

use anyhow::Result;
use base64::{prelude::BASE64_STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stand-in for a name or document type the contributor has not filled yet.
pub const PLACEHOLDER: &str = "???";

/// How to fetch one document of a service and which parts of it matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDeclaration {
    pub fetch: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub select: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove: Vec<String>,
}

/// A service declaration as stored in `declarations/{name}.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub documents: BTreeMap<String, DocumentDeclaration>,
}

impl Declaration {
    pub fn new(
        name: impl Into<String>,
        document_type: impl Into<String>,
        document: DocumentDeclaration,
    ) -> Self {
        Declaration {
            name: name.into(),
            documents: BTreeMap::from([(document_type.into(), document)]),
        }
    }

    /// Two space indented JSON with a trailing newline.
    pub fn to_pretty_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;

        Ok(format!("{}\n", json))
    }

    pub fn to_base64(&self) -> Result<String> {
        let json = self.to_pretty_json()?;

        Ok(BASE64_STANDARD.encode(json.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration() -> Declaration {
        Declaration::new(
            "Example",
            "Terms of Service",
            DocumentDeclaration {
                fetch: "https://example.com/terms".to_owned(),
                select: vec!["main".to_owned()],
                remove: vec![".ads".to_owned(), "footer".to_owned()],
            },
        )
    }

    #[test]
    fn should_serialize_a_pretty_declaration() {
        let json = declaration().to_pretty_json().unwrap();

        assert_eq!(
            json,
            r#"{
  "name": "Example",
  "documents": {
    "Terms of Service": {
      "fetch": "https://example.com/terms",
      "select": [
        "main"
      ],
      "remove": [
        ".ads",
        "footer"
      ]
    }
  }
}
"#
        );
    }

    #[test]
    fn should_skip_empty_selector_lists() {
        let declaration = Declaration::new(
            "Example",
            "Privacy Policy",
            DocumentDeclaration {
                fetch: "https://example.com/privacy.pdf".to_owned(),
                select: vec![],
                remove: vec![],
            },
        );

        let value: serde_json::Value =
            serde_json::from_str(&declaration.to_pretty_json().unwrap()).unwrap();

        assert_eq!(
            value["documents"]["Privacy Policy"],
            serde_json::json!({ "fetch": "https://example.com/privacy.pdf" })
        );
    }

    #[test]
    fn should_encode_the_pretty_json_in_base64() {
        let declaration = declaration();
        let encoded = declaration.to_base64().unwrap();

        let decoded = BASE64_STANDARD.decode(encoded).unwrap();

        assert_eq!(
            String::from_utf8(decoded).unwrap(),
            declaration.to_pretty_json().unwrap()
        );
    }
}
