//! 只读展示：公开菜单、分类详情、店铺统计、二维码

use wavescan_shared::{Category, QrCodeResponse, StoreMenu, StoreSummary};

/// 公开菜单顶部的数量标签
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 Menu".to_string()
    } else {
        format!("{} Menus", count)
    }
}

/// 价格展示（加纳塞地）
pub fn price_label(price: f64) -> String {
    format!("₵{:.2}", price)
}

/// 最后更新时间（UTC）
pub fn updated_label(category: &Category) -> Option<String> {
    category
        .updated_at
        .map(|t| format!("Last updated {}", t.format("%Y-%m-%d %H:%M UTC")))
}

/// 仪表盘统计卡片
///
/// 扫码次数与浏览量没有后端数据，不在这里计算。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    pub total_categories: usize,
    pub active_categories: usize,
}

impl From<&StoreSummary> for StoreStats {
    fn from(store: &StoreSummary) -> Self {
        Self {
            total_categories: store.total_categories(),
            active_categories: store.active_categories(),
        }
    }
}

/// 公开菜单页的展示状态
#[derive(Debug, Clone, PartialEq)]
pub enum MenuPage {
    Loading,
    Failed(String),
    Empty,
    Ready(StoreMenu),
}

impl MenuPage {
    pub fn from_menu(menu: StoreMenu) -> Self {
        if menu.categories.is_empty() {
            MenuPage::Empty
        } else {
            MenuPage::Ready(menu)
        }
    }
}

/// 二维码图片地址
///
/// 后端返回 data-URI 或 URL；裸 base64 按 PNG 处理。
pub fn qr_image_src(qr: &QrCodeResponse) -> String {
    let raw = qr.qr_code.trim();
    if raw.starts_with("data:") || raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("data:image/png;base64,{}", raw)
    }
}
