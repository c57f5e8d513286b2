use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中保存 bearer token 的键
pub const STORAGE_TOKEN_KEY: &str = "token";
/// LocalStorage 中保存店铺 ID 的键
pub const STORAGE_STORE_ID_KEY: &str = "storeId";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    #[default]
    #[serde(alias = "ACTIVE", alias = "Active")]
    Active,
    #[serde(alias = "INACTIVE", alias = "Inactive")]
    Inactive,
}

impl CategoryStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, CategoryStatus::Active)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryStatus::Active => "active",
            CategoryStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 商品状态由后台自由填写（available、sold out ...），不限于分类的两种状态
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Product {
    /// 没有状态时返回 `None`；只有 `active` / `available` 视为在售
    pub fn is_active(&self) -> Option<bool> {
        self.status.as_deref().map(|s| {
            let s = s.trim();
            s.eq_ignore_ascii_case("active") || s.eq_ignore_ascii_case("available")
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: CategoryStatus,
    // 列表接口可能不返回 products 或返回 null，都视为空
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

/// 登录会话：token 与店铺 ID，登录成功后持久化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub store_id: String,
}

impl Session {
    pub fn new(token: impl Into<String>, store_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            store_id: store_id.into(),
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// =========================================================
// 请求 / 响应体 (Payloads)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub store_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub store_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

impl From<AuthResponse> for Session {
    fn from(res: AuthResponse) -> Self {
        Session::new(res.token, res.user.store_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 公开菜单：店铺名 + 分类
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoreMenu {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeResponse {
    /// data-URI 或图片 URL
    pub qr_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: CategoryStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

impl StoreSummary {
    pub fn total_categories(&self) -> usize {
        self.categories.len()
    }

    pub fn active_categories(&self) -> usize {
        self.categories
            .iter()
            .filter(|c| c.status.is_active())
            .count()
    }
}

/// 显式的 `null` 按缺省值处理
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_list_item_without_products() {
        let cat: Category = serde_json::from_value(json!({ "id": "c1", "name": "Drinks" })).unwrap();
        assert!(cat.products.is_empty());
        assert_eq!(cat.status, CategoryStatus::Active);
        assert!(cat.updated_at.is_none());
    }

    #[test]
    fn test_category_status_is_case_insensitive_for_known_spellings() {
        let cat: Category = serde_json::from_value(json!({
            "id": "c1",
            "name": "Drinks",
            "status": "INACTIVE",
            "updatedAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(cat.status, CategoryStatus::Inactive);
        assert!(cat.updated_at.is_some());
    }

    #[test]
    fn test_null_products_decode_as_empty() {
        let cats: Vec<Category> =
            serde_json::from_value(json!([{ "id": "c1", "name": "Drinks", "products": null }]))
                .unwrap();
        assert!(cats[0].products.is_empty());

        let menu: StoreMenu =
            serde_json::from_value(json!({ "name": "Cafe", "categories": null })).unwrap();
        assert!(menu.categories.is_empty());
    }

    #[test]
    fn test_product_status_is_free_form() {
        let products: Vec<Product> = serde_json::from_value(json!([
            { "id": "p1", "name": "Tea", "price": 1.5, "status": "available" },
            { "id": "p2", "name": "Cake", "price": 3, "status": "sold out" },
            { "id": "p3", "name": "Soup", "price": 4 }
        ]))
        .unwrap();
        assert_eq!(products[0].status.as_deref(), Some("available"));
        assert_eq!(products[0].is_active(), Some(true));
        assert_eq!(products[1].is_active(), Some(false));
        assert_eq!(products[2].is_active(), None);
    }

    #[test]
    fn test_create_product_uses_camel_case() {
        let req = CreateProductRequest {
            name: "Cola".into(),
            price: 2.5,
            category_id: "c1".into(),
            description: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({ "name": "Cola", "price": 2.5, "categoryId": "c1" }));
    }

    #[test]
    fn test_auth_response_into_session() {
        let res: AuthResponse =
            serde_json::from_value(json!({ "token": "t", "user": { "storeId": "s1" } })).unwrap();
        let session: Session = res.into();
        assert_eq!(session, Session::new("t", "s1"));
        assert_eq!(session.bearer(), "Bearer t");
    }

    #[test]
    fn test_store_summary_counts() {
        let summary: StoreSummary = serde_json::from_value(json!({
            "id": "s1",
            "name": "Cafe",
            "categories": [
                { "id": "a", "name": "A", "status": "active" },
                { "id": "b", "name": "B", "status": "inactive" },
                { "id": "c", "name": "C", "status": "active" }
            ]
        }))
        .unwrap();
        assert_eq!(summary.total_categories(), 3);
        assert_eq!(summary.active_categories(), 2);
    }
}
