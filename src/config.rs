use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 开发环境下的默认 API 地址
pub const DEV_API_BASE_URL: &str = "http://localhost:5000/api";
/// 生产环境下的默认 API 地址（相对路径，拼接到 origin 上）
pub const PROD_API_BASE_URL: &str = "/api";

/// 运行环境
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 运行环境，决定默认 API 地址
    pub environment: Environment,
    /// API 地址，可为绝对地址或以 `/` 开头的相对路径
    pub api_base_url: String,
    /// 相对 API 地址拼接用的站点 origin
    pub origin: String,
    /// 会话持久化文件
    pub session_file: PathBuf,
    /// 列表每页条数
    pub page_size: u32,
    /// 搜索输入防抖时长（毫秒）
    pub search_debounce_ms: u64,
    /// 保活请求间隔（秒）
    pub keep_alive_interval_secs: u64,
    /// 默认日志过滤规则（RUST_LOG 优先）
    pub log_filter: String,
    // --- 命令行登录用 ---
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            api_base_url: DEV_API_BASE_URL.to_string(),
            origin: "http://localhost:5173".to_string(),
            session_file: PathBuf::from(".exam_admin_session.json"),
            page_size: 10,
            search_debounce_ms: 500,
            keep_alive_interval_secs: 15 * 60,
            log_filter: "exam_admin=info".to_string(),
            admin_email: None,
            admin_password: None,
        }
    }
}

/// TOML 配置文件结构，所有字段可选
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    environment: Option<Environment>,
    api_base_url: Option<String>,
    origin: Option<String>,
    session_file: Option<PathBuf>,
    page_size: Option<u32>,
    search_debounce_ms: Option<u64>,
    keep_alive_interval_secs: Option<u64>,
    log_filter: Option<String>,
    admin_email: Option<String>,
}

impl Config {
    /// 按 默认值 ← 配置文件 ← 环境变量 的顺序加载
    pub fn load() -> AppResult<Self> {
        dotenv::dotenv().ok();

        let path = std::env::var("ADMIN_CONFIG").unwrap_or_else(|_| "admin.toml".to_string());
        let base = if Path::new(&path).exists() {
            Self::from_toml_file(&path)?
        } else {
            Self::default()
        };

        base.merge_env()
    }

    /// 只读环境变量，不读配置文件
    pub fn from_env() -> AppResult<Self> {
        dotenv::dotenv().ok();
        Self::default().merge_env()
    }

    /// 从 TOML 文件加载，缺省字段使用默认值
    pub fn from_toml_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    fn from_toml_str(content: &str, origin_path: &str) -> AppResult<Self> {
        let file: FileConfig = toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: origin_path.to_string(),
            source,
        })?;

        let mut config = Self::default();
        if let Some(env) = file.environment {
            config = config.with_environment(env);
        }
        if let Some(v) = file.api_base_url {
            config.api_base_url = v;
        }
        if let Some(v) = file.origin {
            config.origin = v;
        }
        if let Some(v) = file.session_file {
            config.session_file = v;
        }
        if let Some(v) = file.page_size {
            config.page_size = v;
        }
        if let Some(v) = file.search_debounce_ms {
            config.search_debounce_ms = v;
        }
        if let Some(v) = file.keep_alive_interval_secs {
            config.keep_alive_interval_secs = v;
        }
        if let Some(v) = file.log_filter {
            config.log_filter = v;
        }
        config.admin_email = file.admin_email.or(config.admin_email);
        Ok(config)
    }

    /// 切换运行环境，同时把仍是默认值的 API 地址换成该环境的默认值
    pub fn with_environment(mut self, environment: Environment) -> Self {
        if self.api_base_url == DEV_API_BASE_URL || self.api_base_url == PROD_API_BASE_URL {
            self.api_base_url = match environment {
                Environment::Development => DEV_API_BASE_URL,
                Environment::Production => PROD_API_BASE_URL,
            }
            .to_string();
        }
        self.environment = environment;
        self
    }

    fn merge_env(mut self) -> AppResult<Self> {
        if let Ok(v) = std::env::var("ADMIN_ENV") {
            let env = Environment::parse(&v).ok_or_else(|| ConfigError::EnvVarParseFailed {
                var_name: "ADMIN_ENV".to_string(),
                value: v.clone(),
                expected_type: "development|production".to_string(),
            })?;
            self = self.with_environment(env);
        }
        if let Ok(v) = std::env::var("ADMIN_API_URL") {
            self.api_base_url = v;
        }
        if let Ok(v) = std::env::var("ADMIN_ORIGIN") {
            self.origin = v;
        }
        if let Ok(v) = std::env::var("ADMIN_SESSION_FILE") {
            self.session_file = PathBuf::from(v);
        }
        self.page_size = parse_env("ADMIN_PAGE_SIZE", "u32")?.unwrap_or(self.page_size);
        self.search_debounce_ms = parse_env("ADMIN_SEARCH_DEBOUNCE_MS", "u64")?.unwrap_or(self.search_debounce_ms);
        self.keep_alive_interval_secs =
            parse_env("ADMIN_KEEP_ALIVE_SECS", "u64")?.unwrap_or(self.keep_alive_interval_secs);
        if let Ok(v) = std::env::var("ADMIN_LOG") {
            self.log_filter = v;
        }
        self.admin_email = std::env::var("ADMIN_EMAIL").ok().or(self.admin_email);
        self.admin_password = std::env::var("ADMIN_PASSWORD").ok().or(self.admin_password);
        Ok(self)
    }

    /// 实际请求使用的 API 根地址
    ///
    /// 相对地址拼到 origin 上，结尾不带 `/`
    pub fn resolved_api_base_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if base.starts_with('/') {
            format!("{}{}", self.origin.trim_end_matches('/'), base)
        } else {
            base.to_string()
        }
    }
}

fn parse_env<T: std::str::FromStr>(var_name: &str, expected_type: &str) -> AppResult<Option<T>> {
    match std::env::var(var_name) {
        Ok(value) => value.trim().parse::<T>().map(Some).map_err(|_| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }
            .into()
        }),
        Err(_) => Ok(None),
    }
}
