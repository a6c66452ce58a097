//! Typed client for the remote products endpoint.

use serde::Deserialize;
use url::Url;

use crate::error::Result;

/// Default remote catalog endpoint.
pub const CATALOG_URL: &str = "https://dummyjson.com/products";

/// A single catalog entry.
///
/// Immutable once fetched; the remote may send fields beyond the selected
/// ones (it always includes `id`), which are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Display title
    pub title: String,
    /// Price in the remote catalog's currency
    pub price: f64,
}

/// Wire shape of one page of the products endpoint.
#[derive(Debug, Deserialize)]
struct ProductsPage {
    products: Vec<Product>,
}

/// Client for the paginated products endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base: Url,
}

impl CatalogClient {
    /// Create a client against the default endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base(CATALOG_URL)
    }

    /// Create a client against an alternate endpoint.
    pub fn with_base(base: &str) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base: Url::parse(base)?,
        })
    }

    /// Build the request URL for one page.
    fn page_url(&self, skip: usize, limit: usize) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("skip", &skip.to_string())
            .append_pair("select", "title,price");
        url
    }

    /// Fetch one page of products at the given offset.
    ///
    /// The returned array may be shorter than `limit` only when the
    /// collection is exhausted in that direction; an empty page is the
    /// remote's terminal signal, not an error. No timeout is configured.
    pub async fn fetch_page(&self, skip: usize, limit: usize) -> Result<Vec<Product>> {
        let url = self.page_url(skip, limit);
        let page: ProductsPage = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(page.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_query() {
        let client = CatalogClient::new().unwrap();
        let url = client.page_url(20, 10);

        assert_eq!(
            url.as_str(),
            "https://dummyjson.com/products?limit=10&skip=20&select=title%2Cprice"
        );
    }

    #[test]
    fn test_page_url_alternate_base() {
        let client = CatalogClient::with_base("http://127.0.0.1:8080/products").unwrap();
        let url = client.page_url(0, 30);

        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(url.path(), "/products");
        assert!(url.query().unwrap().contains("limit=30"));
        assert!(url.query().unwrap().contains("skip=0"));
    }

    #[test]
    fn test_invalid_base_is_rejected() {
        assert!(CatalogClient::with_base("not a url").is_err());
    }

    #[test]
    fn test_page_deserialization() {
        let body = r#"{
            "products": [
                { "id": 1, "title": "Essence Mascara Lash Princess", "price": 9.99 },
                { "id": 2, "title": "Eyeshadow Palette with Mirror", "price": 19.99 }
            ],
            "total": 194,
            "skip": 0,
            "limit": 2
        }"#;

        let page: ProductsPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.products.len(), 2);
        assert_eq!(page.products[0].title, "Essence Mascara Lash Princess");
        assert_eq!(page.products[1].price, 19.99);
    }

    #[test]
    fn test_empty_page_deserialization() {
        let page: ProductsPage = serde_json::from_str(r#"{ "products": [] }"#).unwrap();
        assert!(page.products.is_empty());
    }
}
