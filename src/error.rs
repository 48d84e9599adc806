use thiserror::Error;

/// 出错时给用户展示的兜底文案
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 提交前的本地校验错误
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 会话存储错误
    #[error("会话错误: {0}")]
    Session(#[from] SessionError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败（连接、DNS、超时等传输层问题）
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// API 返回非 2xx 响应，401 也走这里
    #[error("API返回错误响应 ({endpoint}): status={status}, message={message:?}")]
    BadResponse {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({endpoint}): {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 提交前的本地校验错误，出现时不会发出任何请求
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Question text is required in English or Hindi")]
    MissingQuestionText,
    #[error("Please select a subject")]
    MissingSubject,
    #[error("Name is required")]
    MissingName,
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Cannot move feedback from {from} to {to}")]
    TransitionNotAllowed { from: String, to: String },
}

/// 会话存储错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("读取会话文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("写入会话文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("会话文件格式错误 ({path}): {source}")]
    Corrupted {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件读取失败
    #[error("读取配置文件失败 ({path}): {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// HTTP 客户端构建失败
    #[error("HTTP客户端初始化失败: {0}")]
    HttpClient(#[source] reqwest::Error),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建API错误响应
    pub fn api_bad_response(endpoint: impl Into<String>, status: u16, message: Option<String>) -> Self {
        AppError::Api(ApiError::BadResponse {
            endpoint: endpoint.into(),
            status,
            message,
        })
    }

    /// 创建JSON解析错误
    pub fn json_parse_failed(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 用于提示框的文案
    ///
    /// 后端带了 message 就原样展示，校验错误展示校验文案，其余一律用兜底文案
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(ApiError::BadResponse {
                message: Some(msg), ..
            }) if !msg.trim().is_empty() => msg.clone(),
            AppError::Validation(e) => e.to_string(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// 是否为本地校验错误
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = AppError::api_bad_response("/questions", 400, Some("Option key missing".into()));
        assert_eq!(err.user_message(), "Option key missing");
    }

    #[test]
    fn test_user_message_falls_back_to_generic() {
        let err = AppError::api_bad_response("/questions", 401, None);
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);

        let blank = AppError::api_bad_response("/questions", 422, Some("  ".into()));
        assert_eq!(blank.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_validation_message_is_shown() {
        let err: AppError = ValidationError::MissingSubject.into();
        assert!(err.is_validation());
        assert_eq!(err.user_message(), "Please select a subject");
    }
}
