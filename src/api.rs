use crate::config::ApiConfig;
use crate::error::{MenuError, MenuResult, ValidationError};
use crate::request::{HttpClient, HttpRequest};
use log::debug;
use wavescan_shared::protocol::{
    CreateCategory, CreateProduct, DeleteCategory, DeleteProduct, Endpoint, GenerateQrCode,
    GetCategory, GetMenu, GetStore, ListCategories, ListProducts,
};
use wavescan_shared::{
    AuthResponse, Category, CreateCategoryRequest, CreateProductRequest, HEADER_AUTHORIZATION,
    LoginRequest, Product, QrCodeResponse, RegisterRequest, Session, StoreMenu, StoreSummary,
};

/// WaveScan 后端 API 客户端
///
/// 这里接受任何实现了 HttpClient 的客户端，浏览器与测试共用同一套请求构造逻辑。
#[derive(Clone)]
pub struct WavescanApi<C> {
    client: C,
    config: ApiConfig,
    session: Option<Session>,
}

impl<C: HttpClient> WavescanApi<C> {
    pub fn new(client: C, config: ApiConfig) -> Self {
        Self {
            client,
            config,
            session: None,
        }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// 当前会话的店铺 ID；未登录时本地拒绝
    pub fn store_id(&self) -> MenuResult<String> {
        self.session
            .as_ref()
            .map(|s| s.store_id.clone())
            .ok_or_else(|| ValidationError::MissingSession.into())
    }

    /// 发送任意端点请求
    ///
    /// 流程：构造 URL -> 附加认证头 -> 发送 -> 非 2xx 转为 Server 错误 -> 解析响应体
    pub async fn send<E: Endpoint>(&self, endpoint: &E) -> MenuResult<E::Response> {
        let url = self.config.url(&endpoint.path());
        let mut req = HttpRequest::new(&url, E::METHOD)
            .with_header("Content-Type", "application/json");

        if E::AUTH {
            let session = self
                .session
                .as_ref()
                .ok_or(MenuError::Validation(ValidationError::MissingSession))?;
            req = req.with_header(HEADER_AUTHORIZATION, &session.bearer());
        }

        let body = endpoint
            .body()
            .map_err(|e| MenuError::network(format!("encode request: {}", e)))?;
        if let Some(body) = body {
            req = req.with_body(body);
        }

        debug!("{} {}", E::METHOD.as_str(), url);
        let resp = self.client.send(req).await?;

        if !resp.is_success() {
            return Err(MenuError::from_response(resp.status, &resp.body));
        }

        E::decode(&resp.body).map_err(|e| MenuError::decode(resp.status, &e))
    }

    // =========================================================
    // 认证
    // =========================================================

    pub async fn login(&self, req: &LoginRequest) -> MenuResult<AuthResponse> {
        self.send(req).await
    }

    pub async fn register(&self, req: &RegisterRequest) -> MenuResult<AuthResponse> {
        self.send(req).await
    }

    // =========================================================
    // 分类
    // =========================================================

    pub async fn list_categories(&self) -> MenuResult<Vec<Category>> {
        let store_id = self.store_id()?;
        self.send(&ListCategories { store_id }).await
    }

    pub async fn get_category(&self, id: &str) -> MenuResult<Category> {
        let store_id = self.store_id()?;
        self.send(&GetCategory {
            store_id,
            id: id.to_string(),
        })
        .await
    }

    pub async fn create_category(&self, name: &str) -> MenuResult<Category> {
        let store_id = self.store_id()?;
        let request = CreateCategoryRequest {
            name: name.to_string(),
        };
        self.send(&CreateCategory { store_id, request }).await
    }

    pub async fn delete_category(&self, id: &str) -> MenuResult<()> {
        let store_id = self.store_id()?;
        self.send(&DeleteCategory {
            store_id,
            id: id.to_string(),
        })
        .await
    }

    // =========================================================
    // 商品
    // =========================================================

    /// 返回店铺全部商品，调用方自行按分类过滤
    pub async fn list_products(&self) -> MenuResult<Vec<Product>> {
        let store_id = self.store_id()?;
        self.send(&ListProducts { store_id }).await
    }

    pub async fn create_product(&self, request: CreateProductRequest) -> MenuResult<Product> {
        let store_id = self.store_id()?;
        self.send(&CreateProduct { store_id, request }).await
    }

    pub async fn delete_product(&self, id: &str) -> MenuResult<()> {
        let store_id = self.store_id()?;
        self.send(&DeleteProduct {
            store_id,
            id: id.to_string(),
        })
        .await
    }

    // =========================================================
    // 店铺 / 菜单
    // =========================================================

    pub async fn get_store(&self) -> MenuResult<StoreSummary> {
        let store_id = self.store_id()?;
        self.send(&GetStore { store_id }).await
    }

    /// 公开菜单不需要会话，店铺 ID 来自二维码链接
    pub async fn get_menu(&self, store_id: &str) -> MenuResult<StoreMenu> {
        self.send(&GetMenu {
            store_id: store_id.to_string(),
        })
        .await
    }

    pub async fn generate_qr_code(&self) -> MenuResult<QrCodeResponse> {
        let store_id = self.store_id()?;
        self.send(&GenerateQrCode { store_id }).await
    }
}
