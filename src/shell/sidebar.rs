use super::Route;

/// 小于该宽度按移动端处理
pub const MOBILE_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
    pub active: bool,
}

/// 侧边栏
///
/// 桌面端常驻；移动端默认收起，点开后导航一次就自动收起
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    mobile: bool,
    open: bool,
}

impl Sidebar {
    pub fn for_width(width: u32) -> Self {
        let mobile = width < MOBILE_BREAKPOINT;
        Self { mobile, open: !mobile }
    }

    /// 窗口尺寸变化
    pub fn resize(&mut self, width: u32) {
        let mobile = width < MOBILE_BREAKPOINT;
        if mobile != self.mobile {
            *self = Self::for_width(width);
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// 点击导航项
    pub fn navigate(&mut self, route: &Route) -> Route {
        if self.mobile {
            self.open = false;
        }
        route.clone()
    }

    /// 导航项，当前页面所在的分组标记为 active
    pub fn items(&self, current: &Route) -> Vec<NavItem> {
        let section = section_of(current);
        [
            ("Dashboard", Route::Dashboard),
            ("Questions", Route::Questions),
            ("Users", Route::Users),
            ("Feedback", Route::Feedback),
        ]
        .into_iter()
        .map(|(label, route)| NavItem {
            label,
            active: section.as_ref() == Some(&route),
            route,
        })
        .collect()
    }
}

fn section_of(route: &Route) -> Option<Route> {
    match route {
        Route::Dashboard => Some(Route::Dashboard),
        Route::Questions | Route::NewQuestion | Route::EditQuestion(_) => Some(Route::Questions),
        Route::Users | Route::UserDetail(_) => Some(Route::Users),
        Route::Feedback => Some(Route::Feedback),
        Route::Login => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_sidebar_closes_after_navigation() {
        let mut sidebar = Sidebar::for_width(400);
        assert!(!sidebar.is_open());

        sidebar.toggle();
        assert!(sidebar.is_open());
        assert_eq!(sidebar.navigate(&Route::Users), Route::Users);
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_desktop_sidebar_stays_open() {
        let mut sidebar = Sidebar::for_width(1280);
        sidebar.navigate(&Route::Feedback);
        assert!(sidebar.is_open());

        sidebar.resize(500);
        assert!(sidebar.is_mobile());
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_edit_page_highlights_questions() {
        let sidebar = Sidebar::for_width(1280);
        let active: Vec<&str> = sidebar
            .items(&Route::EditQuestion("q1".into()))
            .into_iter()
            .filter(|i| i.active)
            .map(|i| i.label)
            .collect();
        assert_eq!(active, vec!["Questions"]);
    }
}
