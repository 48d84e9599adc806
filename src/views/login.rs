//! 登录页
//!
//! 登录成功后写入会话并落盘，然后跳到首页

use crate::api::AuthApi;
use crate::error::{AppError, AppResult, ValidationError};
use crate::models::LoginRequest;
use crate::notify::{Notifier, Toast};
use crate::session::{Session, SessionStore};
use crate::shell::{Navigation, Route};
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(())
    }

    /// 登录
    ///
    /// # 参数
    /// - `api`: 登录接口
    /// - `session`: 成功后写入 token 和管理员信息
    /// - `store`: 会话落盘位置
    pub async fn submit<A: AuthApi>(
        &self,
        api: &A,
        session: &Session,
        store: &SessionStore,
        notifier: &dyn Notifier,
    ) -> AppResult<Navigation> {
        if let Err(e) = self.validate() {
            notifier.notify(Toast::error(e.to_string()));
            return Err(AppError::Validation(e));
        }

        let request = LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        let response = match api.login(&request).await {
            Ok(r) => r,
            Err(e) => {
                notifier.report("登录失败", &e);
                return Err(e);
            }
        };

        session.set_token(response.token);
        session.set_admin(response.admin.clone());
        // 落盘失败不影响本次登录，只是下次启动需要重新登录
        if let Err(e) = store.save(&session.snapshot()).await {
            warn!("⚠️ 会话保存失败: {}", e);
        }

        info!("✓ 管理员 {} 登录成功", response.admin.email);
        notifier.notify(Toast::success(format!("Welcome back, {}", response.admin.name)));
        Ok(Navigation::Push(Route::Dashboard))
    }
}
