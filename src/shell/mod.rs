//! 外壳：路由、守卫、侧边栏、保活

pub mod guard;
pub mod keepalive;
pub mod routes;
pub mod sidebar;

pub use guard::{guard, logout, GuardDecision};
pub use keepalive::{KeepAlive, KEEP_ALIVE_INTERVAL};
pub use routes::{Route, BASE_PATH};
pub use sidebar::{NavItem, Sidebar};

/// 页面跳转
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// 留在当前页
    Stay,
    /// 应用内跳转，保留内存状态
    Push(Route),
    /// 整页跳转，丢弃所有内存状态
    Hard(String),
}
