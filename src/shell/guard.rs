//! 路由守卫与登出
//!
//! 会话状态：anonymous --登录成功--> authenticated --登出 / token 缺失--> anonymous。
//! 没有刷新 token 的逻辑，过期 token 只会在接口报错时暴露出来。

use super::{Navigation, Route};
use crate::session::{Session, SessionStore};
use tracing::{debug, info, warn};

/// 守卫结论
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// 正常渲染
    Render(Route),
    /// 跳转到其他页面
    Redirect(Route),
}

/// 检查当前会话能否访问目标页面
pub fn guard(session: &Session, route: Route) -> GuardDecision {
    let authenticated = session.is_authenticated();
    match (route.is_public(), authenticated) {
        (false, false) => {
            debug!("未登录访问 {}，跳转登录页", route.path());
            GuardDecision::Redirect(Route::Login)
        }
        (true, true) if route == Route::Login => GuardDecision::Redirect(Route::Dashboard),
        _ => GuardDecision::Render(route),
    }
}

/// 登出：清空内存中的 token 和管理员信息、删除持久化文件，
/// 然后整页跳转到登录页，丢弃所有内存状态
///
/// 文件删除失败只记警告，登出本身总是完成
pub async fn logout(session: &Session, store: &SessionStore) -> Navigation {
    session.clear();
    if let Err(e) = store.clear().await {
        warn!("⚠️ 会话文件删除失败 ({}): {}", store.path().display(), e);
    }
    info!("已登出");
    Navigation::Hard(Route::Login.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_route_without_token_redirects() {
        let session = Session::new();
        assert_eq!(guard(&session, Route::Questions), GuardDecision::Redirect(Route::Login));
        assert_eq!(guard(&session, Route::Login), GuardDecision::Render(Route::Login));
    }

    #[tokio::test]
    async fn test_logout_navigates_even_if_file_removal_fails() {
        // 路径是目录，删除文件必然失败
        let dir = std::env::temp_dir().join(format!("exam_admin_logout_dir_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let store = SessionStore::new(&dir);
        let session = Session::new();
        session.set_token("t");

        let nav = logout(&session, &store).await;

        assert_eq!(nav, Navigation::Hard("/admin/login".to_string()));
        assert!(!session.is_authenticated());
        assert_eq!(guard(&session, Route::Questions), GuardDecision::Redirect(Route::Login));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_authenticated_session_renders() {
        let session = Session::new();
        session.set_token("t");
        assert_eq!(guard(&session, Route::Feedback), GuardDecision::Render(Route::Feedback));
        assert_eq!(guard(&session, Route::Login), GuardDecision::Redirect(Route::Dashboard));
    }
}
