//! 页面导航
//!
//! 侧边栏的导航项是一个封闭的页面集合，
//! 每个页面要么有真实实现，要么显式标记为未实现。

/// 应用中的全部页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    Dashboard,
    #[default]
    Declarations,
    CustomsTax,
    Crawlers,
    Proxies,
    Logs,
    Settings,
}

/// 页面主体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBody {
    Declarations,
    CustomsTax,
    /// 尚未实现的页面
    NotImplemented(Page),
}

/// 侧边栏导航项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub title: &'static str,
    pub icon: &'static str,
}

/// 侧边栏上部分组
pub const TOP_ITEMS: [NavItem; 5] = [
    NavItem { page: Page::Dashboard, title: "任务概览", icon: "📊" },
    NavItem { page: Page::Declarations, title: "报关单管理", icon: "📄" },
    NavItem { page: Page::CustomsTax, title: "海关税费单", icon: "🏛" },
    NavItem { page: Page::Crawlers, title: "活跃爬虫", icon: "🐛" },
    NavItem { page: Page::Proxies, title: "代理池", icon: "🛡" },
];

/// 侧边栏底部分组
pub const BOTTOM_ITEMS: [NavItem; 2] = [
    NavItem { page: Page::Logs, title: "执行日志", icon: "🕘" },
    NavItem { page: Page::Settings, title: "系统设置", icon: "⚙" },
];

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Declarations,
        Page::CustomsTax,
        Page::Crawlers,
        Page::Proxies,
        Page::Logs,
        Page::Settings,
    ];

    /// 页面ID
    pub fn id(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Declarations => "declarations",
            Page::CustomsTax => "customs-tax",
            Page::Crawlers => "crawlers",
            Page::Proxies => "proxies",
            Page::Logs => "logs",
            Page::Settings => "settings",
        }
    }

    /// 按ID查找页面
    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.id() == id)
    }

    /// 对应的导航项
    pub fn nav_item(self) -> NavItem {
        TOP_ITEMS
            .into_iter()
            .chain(BOTTOM_ITEMS)
            .find(|item| item.page == self)
            .unwrap_or(NavItem { page: self, title: self.id(), icon: "" })
    }

    pub fn title(self) -> &'static str {
        self.nav_item().title
    }

    /// 页面主体
    pub fn body(self) -> PageBody {
        match self {
            Page::Declarations => PageBody::Declarations,
            Page::CustomsTax => PageBody::CustomsTax,
            Page::Dashboard
            | Page::Crawlers
            | Page::Proxies
            | Page::Logs
            | Page::Settings => PageBody::NotImplemented(self),
        }
    }
}

/// 解析启动页面，无法识别时退回默认页面
pub fn resolve_start_page(id: &str) -> Page {
    Page::from_id(id).unwrap_or_else(|| {
        tracing::warn!("未知的启动页面 \"{}\"，使用默认页面", id);
        Page::default()
    })
}
