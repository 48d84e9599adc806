use super::Loadable;
use crate::api::StatsApi;
use crate::models::DashboardStats;
use crate::notify::Notifier;
use std::sync::Arc;

/// 首页统计
pub struct DashboardView<A> {
    api: Arc<A>,
    stats: Loadable<DashboardStats>,
}

impl<A: StatsApi> DashboardView<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            stats: Loadable::Loading,
        }
    }

    pub async fn load(&mut self, notifier: &dyn Notifier) {
        self.stats = Loadable::Loading;
        self.stats = match self.api.dashboard_stats().await {
            Ok(stats) => Loadable::Loaded(stats),
            Err(e) => {
                notifier.report("加载统计失败", &e);
                Loadable::Failed(e.user_message())
            }
        };
    }

    pub fn stats(&self) -> &Loadable<DashboardStats> {
        &self.stats
    }

    pub fn cards(&self) -> Vec<(&'static str, u64)> {
        self.stats.loaded().map(DashboardStats::cards).unwrap_or_default()
    }
}
