use super::HealthApi;
use crate::clients::ApiClient;
use crate::error::AppResult;
use reqwest::Method;

impl HealthApi for ApiClient {
    /// `GET /help`，只为唤醒后端，不看响应体
    async fn ping(&self) -> AppResult<()> {
        self.send_empty(Method::GET, "/help").await
    }
}
