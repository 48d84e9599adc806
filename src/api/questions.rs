//! 题目 API
//!
//! 更新走 `PATCH /questions/:id`，状态切换走 `PATCH /questions/:id/status`

use super::QuestionApi;
use crate::clients::ApiClient;
use crate::error::AppResult;
use crate::models::{DataEnvelope, Paged, Question, QuestionPayload, QuestionQuery, QuestionStatus};
use reqwest::Method;
use serde_json::json;
use tracing::info;

impl QuestionApi for ApiClient {
    async fn list_questions(&self, query: &QuestionQuery) -> AppResult<Paged<Question>> {
        self.get_json("/questions", &query.to_query_pairs()).await
    }

    async fn get_question(&self, id: &str) -> AppResult<Question> {
        let envelope: DataEnvelope<Question> = self.get_json(&format!("/questions/{}", id), &[]).await?;
        Ok(envelope.data)
    }

    async fn create_question(&self, payload: &QuestionPayload) -> AppResult<Question> {
        let envelope: DataEnvelope<Question> = self.send_json(Method::POST, "/questions", payload).await?;
        info!("✓ 题目已创建: {}", envelope.data.id);
        Ok(envelope.data)
    }

    async fn update_question(&self, id: &str, payload: &QuestionPayload) -> AppResult<Question> {
        let envelope: DataEnvelope<Question> = self
            .send_json(Method::PATCH, &format!("/questions/{}", id), payload)
            .await?;
        info!("✓ 题目已更新: {}", id);
        Ok(envelope.data)
    }

    async fn delete_question(&self, id: &str) -> AppResult<()> {
        self.send_empty(Method::DELETE, &format!("/questions/{}", id)).await?;
        info!("✓ 题目已删除: {}", id);
        Ok(())
    }

    async fn set_question_status(&self, id: &str, status: QuestionStatus) -> AppResult<Question> {
        let envelope: DataEnvelope<Question> = self
            .send_json(
                Method::PATCH,
                &format!("/questions/{}/status", id),
                &json!({ "status": status }),
            )
            .await?;
        Ok(envelope.data)
    }
}
