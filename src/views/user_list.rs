//! 用户列表与用户表单
//!
//! 服务端分页，按搜索词（防抖）和类型页签过滤

use crate::api::UserApi;
use crate::error::{AppError, AppResult, ValidationError};
use crate::models::question::non_empty;
use crate::models::{Pagination, User, UserPayload, UserQuery, UserTab, UserType};
use crate::notify::{Notifier, Toast};
use crate::workflow::Debouncer;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct UserListView<A> {
    api: Arc<A>,
    page_size: u32,
    page: u32,
    search: String,
    tab: UserTab,
    debouncer: Debouncer<String>,
    users: Vec<User>,
    pagination: Pagination,
    loading: bool,
}

impl<A: UserApi> UserListView<A> {
    pub fn new(api: Arc<A>, page_size: u32, debounce: Duration) -> Self {
        Self {
            api,
            page_size: page_size.max(1),
            page: 1,
            search: String::new(),
            tab: UserTab::All,
            debouncer: Debouncer::new(debounce),
            users: Vec::new(),
            pagination: Pagination::default(),
            loading: false,
        }
    }

    pub async fn fetch(&mut self, notifier: &dyn Notifier) -> AppResult<()> {
        let query = UserQuery {
            page: self.page,
            limit: self.page_size,
            search: self.search.clone(),
            tab: self.tab,
        };
        debug!("拉取用户列表: {:?}", query);

        self.loading = true;
        let result = self.api.list_users(&query).await;
        self.loading = false;

        match result {
            Ok(paged) => {
                self.users = paged.data;
                self.pagination = paged.pagination;
                Ok(())
            }
            Err(e) => {
                notifier.report("加载用户列表失败", &e);
                Err(e)
            }
        }
    }

    /// 输入搜索词（防抖）
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.debouncer.push(search.into());
    }

    /// 等待防抖后的搜索词生效并拉取
    pub async fn apply_debounced(&mut self, notifier: &dyn Notifier) -> AppResult<bool> {
        match self.debouncer.next().await {
            Some(search) => {
                self.search = search;
                self.page = 1;
                self.fetch(notifier).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 切换类型页签，立即拉取
    pub async fn set_tab(&mut self, tab: UserTab, notifier: &dyn Notifier) -> AppResult<()> {
        self.tab = tab;
        self.page = 1;
        self.fetch(notifier).await
    }

    pub async fn set_page(&mut self, page: u32, notifier: &dyn Notifier) -> AppResult<()> {
        self.page = page.clamp(1, self.pagination.pages.max(1));
        self.fetch(notifier).await
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn tab(&self) -> UserTab {
        self.tab
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// 新建 / 编辑用户表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub user_type: UserType,
}

impl UserForm {
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: Some(user.id.clone()),
            name: user.name.clone(),
            email: user.email.clone().unwrap_or_default(),
            mobile: user.mobile.clone().unwrap_or_default(),
            user_type: user.user_type,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(())
    }

    pub fn payload(&self) -> UserPayload {
        UserPayload {
            name: self.name.trim().to_string(),
            email: non_empty(&self.email),
            mobile: non_empty(&self.mobile),
            user_type: self.user_type,
        }
    }

    /// 校验后创建或更新
    pub async fn submit<A: UserApi>(&self, api: &A, notifier: &dyn Notifier) -> AppResult<User> {
        if let Err(e) = self.validate() {
            notifier.notify(Toast::error(e.to_string()));
            return Err(AppError::Validation(e));
        }

        let payload = self.payload();
        let result = match self.user_id.as_deref() {
            Some(id) => api.update_user(id, &payload).await,
            None => api.create_user(&payload).await,
        };

        match result {
            Ok(user) => {
                notifier.notify(Toast::success(if self.user_id.is_some() {
                    "User updated successfully"
                } else {
                    "User created successfully"
                }));
                Ok(user)
            }
            Err(e) => {
                notifier.report("保存用户失败", &e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_form_requires_name() {
        let form = UserForm {
            name: "   ".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_user_form_drops_empty_contact_fields() {
        let form = UserForm {
            name: " Priya ".into(),
            email: "".into(),
            mobile: "9876543210".into(),
            user_type: UserType::Registered,
            ..Default::default()
        };
        let json = serde_json::to_value(form.payload()).unwrap();
        assert_eq!(json["name"], "Priya");
        assert!(json.get("email").is_none());
        assert_eq!(json["mobile"], "9876543210");
        assert_eq!(json["type"], "registered");
    }
}
