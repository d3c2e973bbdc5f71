use super::github_client::GithubClient;
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
    RequestBuilder,
};

pub trait Headers {
    fn default_headers(self, client: &GithubClient) -> RequestBuilder;
    fn json_content(self) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, client: &GithubClient) -> RequestBuilder {
        self.bearer_auth(client.token())
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, client.user_agent())
    }

    fn json_content(self) -> RequestBuilder {
        self.header(CONTENT_TYPE, "application/json")
    }
}

#[macro_export]
macro_rules! put {
    ($client:expr, $url:expr, $body:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        let client = $client;
        client
            .http()
            .put($url)
            .default_headers(client)
            .json_content()
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! get {
    ($client:expr, $url:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        let client = $client;
        client
            .http()
            .get($url)
            .default_headers(client)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! post {
    ($client:expr, $url:expr, $body:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        let client = $client;
        client
            .http()
            .post($url)
            .default_headers(client)
            .json_content()
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[cfg(test)]
mod tests {
    use crate::github::github_client::GithubClient;
    use anyhow::Result;
    use mockito::Server;

    fn client(url: &str) -> GithubClient {
        GithubClient::new("test_token", url, "ota-contribute")
    }

    #[tokio::test]
    async fn put_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = client(&server.url());

        let expected_body = "test_body";
        let m = server
            .mock("PUT", "/")
            .match_header("authorization", "Bearer test_token")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", "ota-contribute")
            .match_header("content-type", "application/json")
            .match_body(expected_body)
            .with_body(expected_body)
            .create_async()
            .await;

        let response = put!(&client, server.url(), expected_body)?;

        m.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn get_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = client(&server.url());

        let expected_body = "test_body";

        let m = server
            .mock("GET", "/")
            .match_header("authorization", "Bearer test_token")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", "ota-contribute")
            .with_body(expected_body)
            .create_async()
            .await;

        let response = get!(&client, server.url())?;

        m.assert_async().await;

        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn post_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = client(&server.url());

        let expected_body = "test_body";
        let m = server
            .mock("POST", "/")
            .match_header("authorization", "Bearer test_token")
            .match_header("content-type", "application/json")
            .match_body(expected_body)
            .with_body(expected_body)
            .create_async()
            .await;

        let response = post!(&client, server.url(), expected_body)?;

        m.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }
}
