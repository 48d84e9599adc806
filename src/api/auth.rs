use super::AuthApi;
use crate::clients::ApiClient;
use crate::error::AppResult;
use crate::models::{LoginRequest, LoginResponse};
use reqwest::Method;

impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        self.send_json(Method::POST, "/admin/login", request).await
    }
}
