/// 后台 API 客户端
///
/// 统一处理 API 根地址、鉴权头和响应解析。token 来自构造时传入的 `Session`，
/// 每个请求发出前由 `request` 附加 `Authorization: Bearer ...`。
use crate::config::Config;
use crate::error::{AppError, AppResult, ConfigError};
use crate::models::ErrorBody;
use crate::session::Session;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// 后台 API 客户端
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    /// 创建新的客户端
    pub fn new(config: &Config, session: Arc<Session>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("exam_admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self::with_http(http, config.resolved_api_base_url(), session))
    }

    /// 使用外部构建好的 reqwest 客户端
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>, session: Arc<Session>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.session.set_token(token);
    }

    pub fn clear_token(&self) {
        self.session.clear_token();
    }

    /// 拼接完整地址
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// 构建请求并附加鉴权头
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.token() {
            Some(token) if !token.is_empty() => builder.bearer_auth(token),
            _ => builder,
        }
    }

    /// GET 并解析 JSON
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> AppResult<T> {
        debug!("GET {} {:?}", path, query);
        let builder = self.request(Method::GET, path).query(query);
        self.execute(path, builder).await
    }

    /// 带 JSON 请求体的 POST / PUT / PATCH
    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("{} {}", method, path);
        let builder = self.request(method, path).json(body);
        self.execute(path, builder).await
    }

    /// 不关心响应体的请求，例如 DELETE
    pub async fn send_empty(&self, method: Method, path: &str) -> AppResult<()> {
        debug!("{} {}", method, path);
        let response = self
            .request(method, path)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;
        Self::check_status(path, response).await?;
        Ok(())
    }

    async fn execute<T: DeserializeOwned>(&self, endpoint: &str, builder: RequestBuilder) -> AppResult<T> {
        let response = builder
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;
        let response = Self::check_status(endpoint, response).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;
        serde_json::from_slice(&bytes).map_err(|e| AppError::json_parse_failed(endpoint, e))
    }

    /// 非 2xx 响应转成错误，尽量带上后端的 message
    async fn check_status(endpoint: &str, response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(AppError::api_bad_response(endpoint, status.as_u16(), extract_error_message(&body)))
    }
}

/// 从错误响应体中取出 message
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_token(token: Option<&str>) -> ApiClient {
        let session = Arc::new(Session::new());
        if let Some(t) = token {
            session.set_token(t);
        }
        ApiClient::with_http(reqwest::Client::new(), "http://localhost:5000/api/", session)
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = client_with_token(None);
        assert_eq!(client.url("/questions"), "http://localhost:5000/api/questions");
        assert_eq!(client.url("help"), "http://localhost:5000/api/help");
    }

    #[test]
    fn test_request_attaches_bearer_token() {
        let client = client_with_token(Some("secret"));
        let request = client.request(Method::GET, "/admin/stats").build().unwrap();
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer secret"
        );
    }

    #[test]
    fn test_request_reads_token_on_every_call() {
        let client = client_with_token(None);
        let before = client.request(Method::GET, "/feedback").build().unwrap();
        assert!(before.headers().get(reqwest::header::AUTHORIZATION).is_none());

        client.set_token("late");
        let after = client.request(Method::GET, "/feedback").build().unwrap();
        assert_eq!(after.headers().get(reqwest::header::AUTHORIZATION).unwrap(), "Bearer late");

        client.clear_token();
        let cleared = client.request(Method::GET, "/feedback").build().unwrap();
        assert!(cleared.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"message":"Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(extract_error_message(r#"{"error":"Not found"}"#).as_deref(), Some("Not found"));
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message(r#"{"message":""}"#), None);
    }
}
