//! 日志初始化
//!
//! RUST_LOG 优先，其次使用配置中的过滤规则

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器，重复调用时静默忽略
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars_not_bytes() {
        assert_eq!(truncate_text("प्रश्न", 10), "प्रश्न");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init("debug");
        init("info");
    }
}
