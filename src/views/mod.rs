//! 视图层
//!
//! 每个页面一个控制器，只持有状态、产出数据，不负责渲染

pub mod dashboard;
pub mod feedback_list;
pub mod login;
pub mod question_editor;
pub mod question_list;
pub mod user_detail;
pub mod user_list;

pub use dashboard::DashboardView;
pub use feedback_list::{FeedbackFilters, FeedbackListView};
pub use login::LoginForm;
pub use question_editor::{QuestionModal, QuestionPage};
pub use question_list::{QuestionFilters, QuestionListView, QuestionRow};
pub use user_detail::UserDetailView;
pub use user_list::{UserForm, UserListView};

/// 危险操作前的确认
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// 异步加载的数据
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(v) => Some(v),
            _ => None,
        }
    }
}
