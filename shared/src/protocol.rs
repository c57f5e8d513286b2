use crate::{
    AuthResponse, Category, CreateCategoryRequest, CreateProductRequest, LoginRequest, Product,
    QrCodeResponse, RegisterRequest, StoreMenu, StoreSummary,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Paths are relative to the API base (`.../api`) and carry their own path parameters,
/// so the client never has to know how a given route is shaped.
pub trait Endpoint {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request must carry `Authorization: Bearer <token>`.
    const AUTH: bool = true;

    fn path(&self) -> String;

    /// JSON request body, if any.
    fn body(&self) -> serde_json::Result<Option<String>> {
        Ok(None)
    }

    /// Decode a successful response body.
    fn decode(body: &str) -> serde_json::Result<Self::Response> {
        serde_json::from_str(body)
    }
}

// =========================================================
// Auth
// =========================================================

impl Endpoint for LoginRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: bool = false;

    fn path(&self) -> String {
        "/auth/login".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        serde_json::to_string(self).map(Some)
    }
}

impl Endpoint for RegisterRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: bool = false;

    fn path(&self) -> String {
        "/auth/register".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        serde_json::to_string(self).map(Some)
    }
}

// =========================================================
// Categories
// =========================================================

#[derive(Debug, Clone)]
pub struct ListCategories {
    pub store_id: String,
}

impl Endpoint for ListCategories {
    type Response = Vec<Category>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/store/{}/category", self.store_id)
    }
}

/// Single category with nested products
#[derive(Debug, Clone)]
pub struct GetCategory {
    pub store_id: String,
    pub id: String,
}

impl Endpoint for GetCategory {
    type Response = Category;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/store/{}/category/{}", self.store_id, self.id)
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub store_id: String,
    pub request: CreateCategoryRequest,
}

impl Endpoint for CreateCategory {
    type Response = Category;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/store/{}/category", self.store_id)
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        serde_json::to_string(&self.request).map(Some)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteCategory {
    pub store_id: String,
    pub id: String,
}

impl Endpoint for DeleteCategory {
    // 只关心状态码
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/store/{}/category/{}", self.store_id, self.id)
    }

    fn decode(_body: &str) -> serde_json::Result<()> {
        Ok(())
    }
}

// =========================================================
// Products
// =========================================================

/// All products of the store, not scoped to a category
#[derive(Debug, Clone)]
pub struct ListProducts {
    pub store_id: String,
}

impl Endpoint for ListProducts {
    type Response = Vec<Product>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/store/{}/product", self.store_id)
    }
}

#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub store_id: String,
    pub request: CreateProductRequest,
}

impl Endpoint for CreateProduct {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/store/{}/product", self.store_id)
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        serde_json::to_string(&self.request).map(Some)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteProduct {
    pub store_id: String,
    pub id: String,
}

impl Endpoint for DeleteProduct {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/store/{}/product/{}", self.store_id, self.id)
    }

    fn decode(_body: &str) -> serde_json::Result<()> {
        Ok(())
    }
}

// =========================================================
// Store / Menu
// =========================================================

#[derive(Debug, Clone)]
pub struct GetStore {
    pub store_id: String,
}

impl Endpoint for GetStore {
    type Response = StoreSummary;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/store/{}", self.store_id)
    }
}

/// Public menu, opened by customers from the QR code without a session
#[derive(Debug, Clone)]
pub struct GetMenu {
    pub store_id: String,
}

impl Endpoint for GetMenu {
    type Response = StoreMenu;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTH: bool = false;

    fn path(&self) -> String {
        format!("/store/{}/menu", self.store_id)
    }
}

#[derive(Debug, Clone)]
pub struct GenerateQrCode {
    pub store_id: String,
}

impl Endpoint for GenerateQrCode {
    type Response = QrCodeResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/store/{}/menu/generate-qrc", self.store_id)
    }
}
