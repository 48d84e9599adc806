use super::StatsApi;
use crate::clients::ApiClient;
use crate::error::AppResult;
use crate::models::{DashboardStats, DataEnvelope};

impl StatsApi for ApiClient {
    async fn dashboard_stats(&self) -> AppResult<DashboardStats> {
        let envelope: DataEnvelope<DashboardStats> = self.get_json("/admin/stats", &[]).await?;
        Ok(envelope.data)
    }
}
