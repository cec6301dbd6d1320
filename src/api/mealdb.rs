use super::{ApiError, RecipeSource};
use crate::models::{
    CategoriesResponse, Category, MealDetail, MealRecord, MealSummary, MealsResponse,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

#[derive(Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn categories_request(&self) -> RequestBuilder {
        self.client.get(format!("{}/categories.php", self.base_url))
    }

    fn search_request(&self, query: &str) -> RequestBuilder {
        self.client
            .get(format!("{}/search.php", self.base_url))
            .query(&[("s", query)])
    }

    fn filter_request(&self, category: &str) -> RequestBuilder {
        self.client
            .get(format!("{}/filter.php", self.base_url))
            .query(&[("c", category)])
    }

    fn lookup_request(&self, id: &str) -> RequestBuilder {
        self.client
            .get(format!("{}/lookup.php", self.base_url))
            .query(&[("i", id)])
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let (client, request) = req.build_split();
        let request = request.map_err(|source| ApiError::Transport {
            url: self.base_url.clone(),
            source,
        })?;
        let url = request.url().to_string();
        debug!(%url, "GET");

        let response = client
            .execute(request)
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| ApiError::Transport { url, source })?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                body: text.chars().take(200).collect(),
            });
        }
        serde_json::from_str(&text).map_err(|source| ApiError::Malformed {
            body: text.chars().take(200).collect(),
            source,
        })
    }

    pub async fn try_fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let resp: CategoriesResponse = self.send(self.categories_request()).await?;
        Ok(resp
            .categories
            .unwrap_or_default()
            .into_iter()
            .map(Category::from)
            .collect())
    }

    pub async fn try_search_meals(&self, query: &str) -> Result<Vec<MealSummary>, ApiError> {
        let resp: MealsResponse<MealRecord> = self.send(self.search_request(query)).await?;
        Ok(resp
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(MealRecord::into_summary)
            .collect())
    }

    pub async fn try_filter_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MealSummary>, ApiError> {
        let resp: MealsResponse<MealRecord> = self.send(self.filter_request(category)).await?;
        // filter.php only carries id, name and thumbnail
        Ok(resp
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(|record| MealSummary {
                area: None,
                category: None,
                ..record.into_summary()
            })
            .collect())
    }

    pub async fn try_lookup_meal(&self, id: &str) -> Result<Option<MealDetail>, ApiError> {
        let resp: MealsResponse<MealRecord> = self.send(self.lookup_request(id)).await?;
        Ok(resp
            .meals
            .and_then(|meals| meals.into_iter().next())
            .map(MealRecord::into_detail))
    }
}

fn log_failure<T>(operation: &str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(operation, error = %e, "recipe API call failed");
            None
        }
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn fetch_categories(&self) -> Option<Vec<Category>> {
        log_failure("categories", self.try_fetch_categories().await)
    }

    async fn search_meals(&self, query: &str) -> Option<Vec<MealSummary>> {
        log_failure("search", self.try_search_meals(query).await)
    }

    async fn filter_by_category(&self, name: &str) -> Option<Vec<MealSummary>> {
        log_failure("filter", self.try_filter_by_category(name).await)
    }

    async fn lookup_meal(&self, id: &str) -> Option<MealDetail> {
        log_failure("lookup", self.try_lookup_meal(id).await).flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP response on a loopback port and
    /// returns the base URL to reach it.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let mut seen = Vec::new();
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                seen.extend_from_slice(&buf[..n]);
                if seen.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{}", addr)
    }

    fn local_client(base: String) -> MealDbClient {
        MealDbClient::with_client(Client::builder().no_proxy().build().unwrap(), base)
    }

    #[test]
    fn builds_endpoint_urls() {
        let client = MealDbClient::new(format!("{}/", DEFAULT_BASE_URL));
        let url = |req: RequestBuilder| req.build().unwrap().url().to_string();

        assert_eq!(
            url(client.categories_request()),
            "https://www.themealdb.com/api/json/v1/1/categories.php"
        );
        assert_eq!(
            url(client.search_request("Arrabiata")),
            "https://www.themealdb.com/api/json/v1/1/search.php?s=Arrabiata"
        );
        assert_eq!(
            url(client.filter_request("Sea&food")),
            "https://www.themealdb.com/api/json/v1/1/filter.php?c=Sea%26food"
        );
        assert_eq!(
            url(client.lookup_request("52772")),
            "https://www.themealdb.com/api/json/v1/1/lookup.php?i=52772"
        );
    }

    #[tokio::test]
    async fn parses_categories() {
        let base = serve_once(
            "200 OK",
            r#"{"categories":[{"idCategory":"1","strCategory":"Beef","strCategoryThumb":"https://x/beef.png","strCategoryDescription":"Beef is the culinary name for meat from cattle."}]}"#,
        )
        .await;
        let categories = local_client(base).fetch_categories().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Beef");
        assert!(categories[0].description.is_some());
    }

    #[tokio::test]
    async fn null_search_result_is_empty_not_failure() {
        let base = serve_once("200 OK", r#"{"meals":null}"#).await;
        let meals = local_client(base).search_meals("zzz").await;
        assert_eq!(meals, Some(Vec::new()));
    }

    #[tokio::test]
    async fn server_error_becomes_none() {
        let base = serve_once("500 Internal Server Error", "oops").await;
        let client = local_client(base);
        let err = client.try_fetch_categories().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status, .. } if status.as_u16() == 500));

        let base = serve_once("500 Internal Server Error", "oops").await;
        assert!(local_client(base).fetch_categories().await.is_none());
    }

    #[tokio::test]
    async fn malformed_body_becomes_none() {
        let base = serve_once("200 OK", "<html>not json</html>").await;
        assert!(local_client(base).filter_by_category("Beef").await.is_none());
    }

    #[tokio::test]
    async fn unknown_meal_id_is_none() {
        let base = serve_once("200 OK", r#"{"meals":null}"#).await;
        assert!(local_client(base).lookup_meal("0").await.is_none());
    }

    #[tokio::test]
    async fn filter_drops_detail_fields() {
        let base = serve_once(
            "200 OK",
            r#"{"meals":[{"strMeal":"Beef Wellington","strMealThumb":"w.jpg","idMeal":"52803","strArea":"British"}]}"#,
        )
        .await;
        let meals = local_client(base)
            .filter_by_category("Beef")
            .await
            .unwrap();
        assert_eq!(meals[0].id, "52803");
        assert_eq!(meals[0].area, None);
    }
}
