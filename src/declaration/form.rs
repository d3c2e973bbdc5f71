use super::{CssRules, Declaration, DocumentDeclaration, PLACEHOLDER};
use anyhow::{Context, Result};
use reqwest::Url;

/// Contribution form state, as carried by the query string of a contribution URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceForm {
    pub contribution_url: Option<String>,
    pub destination: Option<String>,
    pub local_path: Option<String>,
    pub url: String,
    pub selected_css: CssRules,
    pub removed_css: CssRules,
    pub document_type: Option<String>,
    pub name: Option<String>,
}

impl ServiceForm {
    pub fn from_url(contribution_url: &str) -> Result<Self> {
        let url = Url::parse(contribution_url)
            .with_context(|| format!("Invalid contribution url {}", contribution_url))?;

        let mut form = ServiceForm::from_pairs(url.query_pairs());
        form.contribution_url = Some(contribution_url.to_owned());

        Ok(form)
    }

    /// Builds the form from decoded query pairs. Repeated selector keys accumulate.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut form = ServiceForm::default();

        for (key, value) in pairs {
            let value = value.as_ref().trim();
            let non_empty = (!value.is_empty()).then(|| value.to_owned());

            match key.as_ref() {
                "destination" => form.destination = non_empty,
                "localPath" => form.local_path = non_empty,
                "url" => form.url = value.to_owned(),
                "selectedCss" | "selectedCss[]" => {
                    form.selected_css.add(value);
                }
                "removedCss" | "removedCss[]" => {
                    form.removed_css.add(value);
                }
                "documentType" => form.document_type = non_empty,
                "name" => form.name = non_empty,
                other => log::debug!("ignoring unknown form field {}", other),
            }
        }

        form
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn document_type(&self) -> &str {
        self.document_type.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn is_pdf(&self) -> bool {
        self.url.to_lowercase().ends_with(".pdf")
    }

    /// PDF documents are tracked whole, web pages need at least one significant part.
    pub fn can_submit(&self) -> bool {
        !self.url.is_empty() && (self.is_pdf() || !self.selected_css.is_empty())
    }

    pub fn declaration(&self) -> Declaration {
        Declaration::new(
            self.name(),
            self.document_type(),
            DocumentDeclaration {
                fetch: self.url.to_owned(),
                select: self.selected_css.to_vec(),
                remove: self.removed_css.to_vec(),
            },
        )
    }
}
