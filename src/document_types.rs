use crate::http::{HttpClient, ResponseHandler};
use anyhow::{Context, Result};
use itertools::Itertools;
use serde_json::{Map, Value};

/// Known document types, sorted and without duplicates.
///
/// An empty list means the catalog could not be fetched, not that it defines nothing.
pub async fn list_document_types(catalog_url: &str) -> Vec<String> {
    match fetch_document_types(catalog_url).await {
        Ok(types) => types,
        Err(err) => {
            log::error!("Cannot list document types from {}: {:#}", catalog_url, err);
            vec![]
        }
    }
}

async fn fetch_document_types(catalog_url: &str) -> Result<Vec<String>> {
    let response = HttpClient::new()
        .get(catalog_url)
        .send()
        .await
        .handle()
        .await?;

    let catalog = serde_json::from_str::<Map<String, Value>>(&response)
        .context("document types catalog is not a JSON object")?;

    Ok(catalog.into_iter().map(|(key, _)| key).sorted().dedup().collect())
}

/// Whether `candidate` may be submitted. An unavailable catalog accepts anything.
pub fn is_known_document_type(types: &[String], candidate: &str) -> bool {
    types.is_empty() || types.iter().any(|known| known == candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn should_list_sorted_catalog_keys() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/data/api/list_documentTypes/v1/")
            .with_body(
                r#"{
                    "Terms of Service": { "commitment": {} },
                    "Privacy Policy": { "commitment": {} },
                    "Community Guidelines": {}
                }"#,
            )
            .create_async()
            .await;

        let types =
            list_document_types(&format!("{}/data/api/list_documentTypes/v1/", server.url()))
                .await;

        mock.assert_async().await;
        assert_eq!(
            types,
            vec!["Community Guidelines", "Privacy Policy", "Terms of Service"]
        );
    }

    #[tokio::test]
    async fn should_keep_a_single_entry_for_repeated_keys() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .with_body(r#"{"b": 1, "a": 2, "b": 3}"#)
            .create_async()
            .await;

        let types = list_document_types(&server.url()).await;

        assert_eq!(types, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn should_return_an_empty_list_when_the_catalog_fails() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(503)
            .create_async()
            .await;

        assert!(list_document_types(&server.url()).await.is_empty());
    }

    #[tokio::test]
    async fn should_return_an_empty_list_when_the_catalog_is_unreachable() {
        assert!(list_document_types("http://127.0.0.1:1/").await.is_empty());
    }

    #[tokio::test]
    async fn should_return_an_empty_list_for_a_non_object_catalog() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .with_body(r#"["Terms of Service"]"#)
            .create_async()
            .await;

        assert!(list_document_types(&server.url()).await.is_empty());
    }

    #[test]
    fn should_accept_any_type_when_the_catalog_is_unavailable() {
        let types = vec!["Terms of Service".to_owned()];

        assert!(is_known_document_type(&types, "Terms of Service"));
        assert!(!is_known_document_type(&types, "Terms"));
        assert!(is_known_document_type(&[], "Terms"));
    }
}
