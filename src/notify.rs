//! 提示消息（toast）
//!
//! 视图层只负责产出提示，怎么展示由调用方实现 `Notifier`

use crate::error::AppError;
use std::sync::Mutex;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// 一条短暂提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }
}

/// 提示输出通道
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);

    /// 记录诊断日志并把错误转成提示
    fn report(&self, context: &str, err: &AppError) {
        error!("{}: {}", context, err);
        self.notify(Toast::error(err.user_message()));
    }
}

/// 直接写日志的提示输出，命令行下使用
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => info!("✓ {}", toast.message),
            ToastKind::Info => info!("{}", toast.message),
            ToastKind::Error => error!("❌ {}", toast.message),
        }
    }

    /// 提示本身就是日志，诊断信息和提示合成一行输出
    fn report(&self, context: &str, err: &AppError) {
        error!("❌ {}: {} ({})", context, err.user_message(), err);
    }
}

/// 把提示攒起来，供界面轮询取走
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取走当前所有提示
    pub fn drain(&self) -> Vec<Toast> {
        match self.toasts.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: Toast) {
        match self.toasts.lock() {
            Ok(mut guard) => guard.push(toast),
            Err(poisoned) => poisoned.into_inner().push(toast),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use std::io::Write;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_tracing_notifier_logs_report_once() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let err = AppError::api_bad_response("/feedback", 500, Some("Feedback service down".to_string()));
        tracing::subscriber::with_default(subscriber, || TracingNotifier.report("加载反馈失败", &err));

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("加载反馈失败"));
        assert!(output.contains("Feedback service down"));
    }

    #[test]
    fn test_report_turns_error_into_toast() {
        let queue = ToastQueue::new();
        let err: AppError = ValidationError::MissingQuestionText.into();

        queue.report("保存题目失败", &err);

        let toasts = queue.drain();
        assert_eq!(toasts, vec![Toast::error("Question text is required in English or Hindi")]);
        assert!(queue.drain().is_empty());
    }
}
