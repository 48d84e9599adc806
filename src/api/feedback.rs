use super::FeedbackApi;
use crate::clients::ApiClient;
use crate::error::AppResult;
use crate::models::{DataEnvelope, Feedback, FeedbackStatus};
use reqwest::Method;
use serde_json::json;
use tracing::info;

impl FeedbackApi for ApiClient {
    /// 一次取全量，筛选排序都在本地做
    async fn list_feedback(&self) -> AppResult<Vec<Feedback>> {
        let envelope: DataEnvelope<Vec<Feedback>> = self.get_json("/feedback", &[]).await?;
        Ok(envelope.data)
    }

    async fn update_feedback_status(&self, id: &str, status: FeedbackStatus) -> AppResult<Feedback> {
        let envelope: DataEnvelope<Feedback> = self
            .send_json(
                Method::PATCH,
                &format!("/feedback/{}/status", id),
                &json!({ "status": status }),
            )
            .await?;
        info!("✓ 反馈 {} 已标记为 {}", id, status);
        Ok(envelope.data)
    }
}
