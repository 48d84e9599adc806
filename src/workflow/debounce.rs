//! 防抖器
//!
//! 每个输入框一个实例。每次 `push` 都会取消上一次尚未触发的定时器，
//! 空闲满 `delay` 后只把最后一个值送出去（后写者胜）。
//! 只用来减少请求量，不保证响应的先后顺序。

use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    rx: mpsc::UnboundedReceiver<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            delay,
            tx,
            rx,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 提交新值，重新开始计时
    pub fn push(&self, value: T) {
        let tx = self.tx.clone();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(value);
        });

        let mut pending = self.pending.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// 取消尚未触发的值
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }

    /// 是否还有值在等待触发
    pub fn is_pending(&self) -> bool {
        let pending = self.pending.lock().unwrap_or_else(|p| p.into_inner());
        pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// 等待下一个防抖后的值；消费滞后时只返回已触发值中最新的一个
    pub async fn next(&mut self) -> Option<T> {
        let first = self.rx.recv().await?;
        Some(self.drain_newer(first))
    }

    /// 非阻塞地取已经触发的值，同样只保留最新的
    pub fn try_next(&mut self) -> Option<T> {
        let first = self.rx.try_recv().ok()?;
        Some(self.drain_newer(first))
    }

    fn drain_newer(&mut self, mut latest: T) -> T {
        while let Ok(newer) = self.rx.try_recv() {
            latest = newer;
        }
        latest
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}
