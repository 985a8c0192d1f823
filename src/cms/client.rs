use gloo_net::http::Request;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::cms::models::Post;
use crate::config;

const POST_PROJECTION: &str = r#"{
    _id,
    title,
    "slug": slug.current,
    excerpt,
    body,
    author->{name, role, "imageUrl": image.asset->url},
    categories[]->{title, "slug": slug.current},
    publishedAt,
    readingTimeMinutes,
    "mainImage": mainImage.asset->url
}"#;

#[derive(Debug, Error)]
pub enum CmsError {
    #[error("request to CMS failed: {0}")]
    Network(String),
    #[error("CMS answered with HTTP {0}")]
    Status(u16),
    #[error("malformed CMS response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for CmsError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => CmsError::Decode(e.to_string()),
            other => CmsError::Network(other.to_string()),
        }
    }
}

/// Read side of the blog. Implemented over HTTP by [`CmsClient`] and by
/// in-memory fakes in tests.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    /// Published posts, newest first.
    async fn posts(&self) -> Result<Vec<Post>, CmsError>;

    async fn post(&self, slug: &str) -> Result<Option<Post>, CmsError>;
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CmsClient {
    base_url: String,
}

impl Default for CmsClient {
    fn default() -> Self {
        Self::new(config::get_cms_url())
    }
}

impl CmsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn posts_url(&self) -> String {
        let query = format!(
            r#"*[_type == "post" && defined(slug.current)] | order(publishedAt desc) {}"#,
            POST_PROJECTION
        );
        format!("{}?query={}", self.base_url, urlencoding::encode(&query))
    }

    pub fn post_url(&self, slug: &str) -> Result<String, CmsError> {
        let query = format!(
            r#"*[_type == "post" && slug.current == $slug][0] {}"#,
            POST_PROJECTION
        );
        // Query parameters travel JSON-encoded
        let slug = serde_json::to_string(slug).map_err(|e| CmsError::Decode(e.to_string()))?;
        Ok(format!(
            "{}?query={}&%24slug={}",
            self.base_url,
            urlencoding::encode(&query),
            urlencoding::encode(&slug)
        ))
    }

    async fn query<T: DeserializeOwned>(&self, url: &str) -> Result<T, CmsError> {
        debug!("CMS query: {}", url);
        let response = Request::get(url).send().await?;
        if !response.ok() {
            return Err(CmsError::Status(response.status()));
        }
        let body: QueryResponse<T> = response.json().await?;
        Ok(body.result)
    }
}

impl ContentSource for CmsClient {
    async fn posts(&self) -> Result<Vec<Post>, CmsError> {
        self.query(&self.posts_url()).await
    }

    async fn post(&self, slug: &str) -> Result<Option<Post>, CmsError> {
        let url = self.post_url(slug)?;
        self.query(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_url_carries_json_encoded_slug() {
        let client = CmsClient::new("https://cms.test/query/production");
        let url = client.post_url("ats-vs-crm").unwrap();
        assert!(url.starts_with("https://cms.test/query/production?query="));
        assert!(url.ends_with("&%24slug=%22ats-vs-crm%22"));
    }

    #[test]
    fn listing_query_orders_by_publish_date() {
        let url = CmsClient::new("https://cms.test").posts_url();
        let query = urlencoding::decode(url.trim_start_matches("https://cms.test?query=")).unwrap();
        assert!(query.contains("order(publishedAt desc)"));
        assert!(query.contains(r#""slug": slug.current"#));
    }

    #[test]
    fn envelope_with_null_result_decodes_to_none() {
        let body: QueryResponse<Option<Post>> = serde_json::from_str(r#"{"result": null, "ms": 3}"#).unwrap();
        assert!(body.result.is_none());
    }
}
