//! 保活探测
//!
//! 后台定时请求 `GET /help`，防止后端实例空闲休眠。
//! 尽力而为：失败直接吞掉，既不提示也不记日志。

use crate::api::HealthApi;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// 默认探测间隔：15 分钟
pub const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// 后台保活任务，drop 时停止
pub struct KeepAlive {
    handle: JoinHandle<()>,
}

impl KeepAlive {
    /// 启动后台任务，首个探测在一个间隔之后发出
    pub fn spawn<A>(api: Arc<A>, interval: Duration) -> Self
    where
        A: HealthApi + 'static,
    {
        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + interval;
            let mut ticker = tokio::time::interval_at(start, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let _ = api.ping().await;
            }
        });
        Self { handle }
    }

    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for KeepAlive {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
