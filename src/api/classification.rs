use super::ClassificationApi;
use crate::clients::ApiClient;
use crate::error::AppResult;
use crate::models::{DataEnvelope, Subject, Unit};
use reqwest::Method;
use serde_json::json;

impl ClassificationApi for ApiClient {
    async fn list_subjects(&self) -> AppResult<Vec<Subject>> {
        let envelope: DataEnvelope<Vec<Subject>> = self.get_json("/questions/subjects/list", &[]).await?;
        Ok(envelope.data)
    }

    /// 一次请求拿到科目下所有单元及其章节
    async fn list_units(&self, subject_id: &str) -> AppResult<Vec<Unit>> {
        let envelope: DataEnvelope<Vec<Unit>> = self
            .send_json(
                Method::POST,
                "/questions/subjects/units",
                &json!({ "subjectId": subject_id }),
            )
            .await?;
        Ok(envelope.data)
    }
}
