use super::UserApi;
use crate::clients::ApiClient;
use crate::error::AppResult;
use crate::models::{DataEnvelope, Paged, User, UserPayload, UserQuery, UserStats};
use reqwest::Method;
use tracing::info;

impl UserApi for ApiClient {
    async fn list_users(&self, query: &UserQuery) -> AppResult<Paged<User>> {
        self.get_json("/admin/users", &query.to_query_pairs()).await
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        let envelope: DataEnvelope<User> = self.get_json(&format!("/admin/users/{}", id), &[]).await?;
        Ok(envelope.data)
    }

    async fn get_user_stats(&self, id: &str) -> AppResult<UserStats> {
        let envelope: DataEnvelope<UserStats> = self
            .get_json(&format!("/admin/users/{}/stats", id), &[])
            .await?;
        Ok(envelope.data)
    }

    async fn create_user(&self, payload: &UserPayload) -> AppResult<User> {
        let envelope: DataEnvelope<User> = self.send_json(Method::POST, "/admin/users", payload).await?;
        info!("✓ 用户已创建: {}", envelope.data.id);
        Ok(envelope.data)
    }

    async fn update_user(&self, id: &str, payload: &UserPayload) -> AppResult<User> {
        let envelope: DataEnvelope<User> = self
            .send_json(Method::PUT, &format!("/admin/users/{}", id), payload)
            .await?;
        info!("✓ 用户已更新: {}", id);
        Ok(envelope.data)
    }
}
