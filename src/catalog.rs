//! 分类 / 商品视图模型
//!
//! 维护两个相关集合：店铺级的分类列表，以及当前激活分类下的商品列表。
//! 所有网络调用都遵循同一流程：
//! 本地校验 -> 标记进行中 -> 请求 -> 用发起时捕获的上下文回写状态 -> 清除标记
//!
//! 状态本身放在 [`StateCell`] 里，核心库用 `Rc<RefCell<_>>`，
//! 前端用响应式信号，两边共用同一个 [`CatalogManager`]。

use crate::api::WavescanApi;
use crate::error::{MenuError, MenuResult, ValidationError};
use crate::notice::Notice;
use crate::request::HttpClient;
use log::{debug, error, warn};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use uuid::Uuid;
use wavescan_shared::{Category, CreateProductRequest, Product};

// =========================================================
// 进行中的操作
// =========================================================

/// 进行中操作的键
///
/// 同一个键同时只能有一个请求；不同键互不阻塞。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    LoadCategories,
    /// 按激活代数区分，切换分类后旧请求不再算作“当前加载”
    LoadProducts {
        category_id: String,
        generation: u64,
    },
    AddCategory,
    AddProduct,
    DeleteCategory(String),
    DeleteProduct(String),
}

// =========================================================
// 状态
// =========================================================

/// 商品加载进行期间在本地完成的增删，响应到达时重放到结果上
#[derive(Debug, Clone)]
enum LocalEdit {
    Added(Product),
    Removed(String),
}

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub categories: Vec<Category>,
    /// 当前激活分类的商品
    pub products: Vec<Product>,
    pub active_category: Option<String>,
    pub notice: Option<Notice>,
    in_flight: HashSet<Operation>,
    /// 每次切换激活分类加一，用于识别过期响应
    generation: u64,
    /// `products` 已由服务端确认属于哪个分类
    products_for: Option<String>,
    /// 每次本地增删商品加一
    products_revision: u64,
    /// 商品加载进行期间的本地增删，带发生时的修订号
    edits: Vec<(u64, LocalEdit)>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn products_revision(&self) -> u64 {
        self.products_revision
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    fn category_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    pub fn active(&self) -> Option<&Category> {
        self.active_category
            .as_deref()
            .and_then(|id| self.category(id))
    }

    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id).or_else(|| {
            self.categories
                .iter()
                .flat_map(|c| c.products.iter())
                .find(|p| p.id == id)
        })
    }

    /// 分类下的商品数
    ///
    /// 激活分类的商品已加载时以加载结果为准，否则取分类记录自带的商品。
    pub fn product_count(&self, category_id: &str) -> usize {
        if self.products_for.as_deref() == Some(category_id) {
            return self.products.len();
        }
        self.category(category_id)
            .map(Category::product_count)
            .unwrap_or(0)
    }

    // --- 进行中标记查询（供 UI 禁用按钮） ---

    pub fn is_pending(&self, op: &Operation) -> bool {
        self.in_flight.contains(op)
    }

    pub fn is_loading_categories(&self) -> bool {
        self.is_pending(&Operation::LoadCategories)
    }

    pub fn is_loading_products(&self) -> bool {
        self.in_flight.iter().any(|op| {
            matches!(op, Operation::LoadProducts { generation, .. } if *generation == self.generation)
        })
    }

    pub fn is_adding_category(&self) -> bool {
        self.is_pending(&Operation::AddCategory)
    }

    pub fn is_adding_product(&self) -> bool {
        self.is_pending(&Operation::AddProduct)
    }

    pub fn is_deleting_category(&self, id: &str) -> bool {
        self.is_pending(&Operation::DeleteCategory(id.to_string()))
    }

    pub fn is_deleting_product(&self, id: &str) -> bool {
        self.is_pending(&Operation::DeleteProduct(id.to_string()))
    }

    // --- 状态转换 ---

    /// 切换激活分类，返回是否真的发生了切换
    pub fn set_active(&mut self, id: Option<String>) -> bool {
        if self.active_category == id {
            return false;
        }
        self.active_category = id;
        self.generation += 1;
        self.products_for = None;
        self.edits.clear();
        // 先展示分类记录里已知的商品，等待重新拉取
        self.products = self
            .active()
            .map(|c| c.products.clone())
            .unwrap_or_default();
        true
    }

    /// 替换分类列表；没有激活分类（或激活分类已不存在）时选中第一个
    pub fn replace_categories(&mut self, categories: Vec<Category>) -> bool {
        self.categories = categories;
        if self.active().is_some() {
            return false;
        }
        let first = self.categories.first().map(|c| c.id.clone());
        self.set_active(first)
    }

    /// 应用商品列表响应；过期响应（分类或代数不匹配）被丢弃并返回 false
    ///
    /// `revision` 是发起请求时的 [`products_revision`](Self::products_revision)，
    /// 请求期间本地完成的增删会重放到结果上，不会被较早的快照覆盖。
    pub fn apply_products(
        &mut self,
        category_id: &str,
        generation: u64,
        revision: u64,
        all: Vec<Product>,
    ) -> bool {
        if self.generation != generation || self.active_category.as_deref() != Some(category_id) {
            return false;
        }
        // 接口返回的是全店商品，这里按分类过滤
        let mut scoped: Vec<Product> = all
            .into_iter()
            .filter(|p| p.category_id == category_id)
            .collect();
        for (_, edit) in self.edits.drain(..).filter(|(r, _)| *r > revision) {
            match edit {
                LocalEdit::Added(p) => {
                    if p.category_id == category_id && scoped.iter().all(|q| q.id != p.id) {
                        scoped.push(p);
                    }
                }
                LocalEdit::Removed(id) => scoped.retain(|q| q.id != id),
            }
        }
        if let Some(category) = self.category_mut(category_id) {
            category.products = scoped.clone();
        }
        self.products = scoped;
        self.products_for = Some(category_id.to_string());
        true
    }

    pub fn push_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// 追加新建的商品；`category_id` 是发起请求时的分类
    pub fn push_product(&mut self, category_id: &str, mut product: Product) {
        if product.category_id.is_empty() {
            product.category_id = category_id.to_string();
        }
        if let Some(category) = self.category_mut(category_id) {
            category.products.push(product.clone());
        }
        if self.active_category.as_deref() == Some(category_id) {
            self.products.push(product.clone());
        }
        self.record(LocalEdit::Added(product));
    }

    /// 移除分类，返回激活分类是否因此改变
    pub fn remove_category(&mut self, id: &str) -> bool {
        self.categories.retain(|c| c.id != id);
        if self.active_category.as_deref() != Some(id) {
            return false;
        }
        let first = self.categories.first().map(|c| c.id.clone());
        self.set_active(first)
    }

    pub fn remove_product(&mut self, id: &str) {
        self.products.retain(|p| p.id != id);
        for category in &mut self.categories {
            category.products.retain(|p| p.id != id);
        }
        self.record(LocalEdit::Removed(id.to_string()));
    }

    // 没有加载在进行时无需记录
    fn record(&mut self, edit: LocalEdit) {
        self.products_revision += 1;
        if self.is_loading_products() {
            self.edits.push((self.products_revision, edit));
        }
    }

    pub fn dismiss_notice(&mut self, id: Uuid) {
        if self.notice.as_ref().is_some_and(|n| n.id == id) {
            self.notice = None;
        }
    }
}

// =========================================================
// 状态容器抽象
// =========================================================

/// 视图模型状态的存放位置
///
/// 实现方保证闭包执行期间独占访问；闭包内不得再次访问同一个容器。
pub trait StateCell: Clone {
    fn read<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> R;
    fn write<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> R;
}

impl StateCell for Rc<RefCell<CatalogState>> {
    fn read<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> R {
        f(&self.borrow())
    }

    fn write<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// 进行中标记守卫：无论成功、失败还是 future 被丢弃，drop 时都会清除标记
struct InFlight<S: StateCell> {
    cell: S,
    op: Operation,
}

impl<S: StateCell> InFlight<S> {
    fn begin(cell: &S, op: Operation) -> MenuResult<Self> {
        let inserted = cell.write(|s| s.in_flight.insert(op.clone()));
        if !inserted {
            debug!("{:?} already in flight", op);
            return Err(ValidationError::AlreadyPending.into());
        }
        Ok(Self {
            cell: cell.clone(),
            op,
        })
    }
}

impl<S: StateCell> Drop for InFlight<S> {
    fn drop(&mut self) {
        self.cell.write(|s| {
            s.in_flight.remove(&self.op);
        });
    }
}

// =========================================================
// 表单
// =========================================================

/// 新商品表单（原始输入）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl ProductDraft {
    pub fn validate(&self, category_id: &str) -> Result<CreateProductRequest, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("product name"));
        }
        let raw_price = self.price.trim();
        if raw_price.is_empty() {
            return Err(ValidationError::EmptyField("price"));
        }
        let price: f64 = raw_price
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite())
            .ok_or_else(|| ValidationError::InvalidPrice(raw_price.to_string()))?;
        if price < 0.0 {
            return Err(ValidationError::NegativePrice);
        }
        let description = self.description.trim();

        Ok(CreateProductRequest {
            name: name.to_string(),
            price,
            category_id: category_id.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

// =========================================================
// 视图模型
// =========================================================

#[derive(Clone)]
pub struct CatalogManager<C, S> {
    api: WavescanApi<C>,
    state: S,
}

impl<C: HttpClient, S: StateCell> CatalogManager<C, S> {
    pub fn new(api: WavescanApi<C>, state: S) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// 拉取全部分类
    ///
    /// 失败时保留上一次成功的快照。若因此选中了新的激活分类，会继续拉取其商品。
    pub async fn list_categories(&self) -> MenuResult<()> {
        let guard = InFlight::begin(&self.state, Operation::LoadCategories)?;
        let categories = self
            .api
            .list_categories()
            .await
            .map_err(|e| self.report("Failed to load categories", e))?;

        let switched = self.state.write(|s| s.replace_categories(categories));
        drop(guard);

        if switched {
            self.refresh_after_switch().await;
        }
        Ok(())
    }

    /// 拉取当前激活分类的商品
    pub async fn load_products(&self) -> MenuResult<()> {
        let target = self.state.read(|s| {
            s.active_category
                .clone()
                .map(|id| (id, s.generation, s.products_revision))
        });
        let Some((category_id, generation, revision)) = target else {
            self.state.write(|s| s.products.clear());
            return Ok(());
        };

        let _guard = InFlight::begin(
            &self.state,
            Operation::LoadProducts {
                category_id: category_id.clone(),
                generation,
            },
        )?;

        match self.api.list_products().await {
            Ok(all) => {
                let applied = self
                    .state
                    .write(|s| s.apply_products(&category_id, generation, revision, all));
                if !applied {
                    warn!("discarding stale product list for category {}", category_id);
                }
                Ok(())
            }
            Err(e) => {
                let current = self.state.read(|s| s.generation == generation);
                if current {
                    Err(self.report("Failed to load products", e))
                } else {
                    warn!("stale product fetch for {} failed: {}", category_id, e);
                    Err(e)
                }
            }
        }
    }

    /// 切换激活分类并拉取其商品
    pub async fn select_category(&self, id: &str) -> MenuResult<()> {
        if self.state.read(|s| s.category(id).is_none()) {
            warn!("select unknown category {}", id);
            return Ok(());
        }
        let switched = self.state.write(|s| s.set_active(Some(id.to_string())));
        if switched {
            self.load_products().await?;
        }
        Ok(())
    }

    /// 新建分类；成功后追加到列表并切换为激活分类
    pub async fn add_category(&self, name: &str) -> MenuResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(self.report(
                "Failed to add category",
                ValidationError::EmptyField("category name").into(),
            ));
        }

        let guard = InFlight::begin(&self.state, Operation::AddCategory)?;
        let created = self
            .api
            .create_category(name)
            .await
            .map_err(|e| self.report("Failed to add category", e))?;

        let switched = self.state.write(|s| {
            s.push_category(created.clone());
            s.notice = Some(Notice::success(format!("Category \"{}\" added", created.name)));
            s.set_active(Some(created.id.clone()))
        });
        drop(guard);

        if switched {
            self.refresh_after_switch().await;
        }
        Ok(created)
    }

    /// 在当前激活分类下新建商品
    pub async fn add_product(&self, draft: &ProductDraft) -> MenuResult<Product> {
        let category_id = self.state.read(|s| s.active_category.clone());
        let request = category_id
            .as_deref()
            .ok_or(ValidationError::NoActiveCategory)
            .and_then(|id| draft.validate(id))
            .map_err(|e| self.report("Failed to add product", e.into()))?;
        // 回写时使用发起请求时的分类，而不是届时的激活分类
        let category_id = request.category_id.clone();

        let _guard = InFlight::begin(&self.state, Operation::AddProduct)?;
        let created = self
            .api
            .create_product(request)
            .await
            .map_err(|e| self.report("Failed to add product", e))?;

        self.state.write(|s| {
            s.push_product(&category_id, created.clone());
            s.notice = Some(Notice::success(format!("Product \"{}\" added", created.name)));
        });
        Ok(created)
    }

    /// 删除分类
    ///
    /// 分类下仍有商品时本地拒绝；否则需要 `confirm` 同意才会发出请求。
    /// 返回是否真的删除了。
    pub async fn delete_category(
        &self,
        id: &str,
        confirm: impl FnOnce(&Category) -> bool,
    ) -> MenuResult<bool> {
        let Some((category, count)) = self
            .state
            .read(|s| s.category(id).cloned().map(|c| (c, s.product_count(id))))
        else {
            warn!("delete unknown category {}", id);
            return Ok(false);
        };

        if count > 0 {
            return Err(self.report(
                "Cannot delete category",
                ValidationError::CategoryNotEmpty { count }.into(),
            ));
        }
        if !confirm(&category) {
            return Ok(false);
        }

        let guard = InFlight::begin(&self.state, Operation::DeleteCategory(id.to_string()))?;
        self.api
            .delete_category(id)
            .await
            .map_err(|e| self.report("Failed to delete category", e))?;

        let switched = self.state.write(|s| {
            s.notice = Some(Notice::success(format!("Category \"{}\" deleted", category.name)));
            s.remove_category(id)
        });
        drop(guard);

        if switched {
            self.refresh_after_switch().await;
        }
        Ok(true)
    }

    /// 删除商品，必须经 `confirm` 同意
    pub async fn delete_product(
        &self,
        id: &str,
        confirm: impl FnOnce(&Product) -> bool,
    ) -> MenuResult<bool> {
        let Some(product) = self.state.read(|s| s.find_product(id).cloned()) else {
            warn!("delete unknown product {}", id);
            return Ok(false);
        };
        if !confirm(&product) {
            return Ok(false);
        }

        let _guard = InFlight::begin(&self.state, Operation::DeleteProduct(id.to_string()))?;
        self.api
            .delete_product(id)
            .await
            .map_err(|e| self.report("Failed to delete product", e))?;

        self.state.write(|s| {
            s.remove_product(id);
            s.notice = Some(Notice::success(format!("Product \"{}\" deleted", product.name)));
        });
        Ok(true)
    }

    pub fn dismiss_notice(&self, id: Uuid) {
        self.state.write(|s| s.dismiss_notice(id));
    }

    // 商品加载失败已经在 load_products 里转为通知
    async fn refresh_after_switch(&self) {
        if let Err(e) = self.load_products().await {
            debug!("product refresh after switch failed: {}", e);
        }
    }

    /// 把错误转为通知并原样返回
    fn report(&self, context: &str, err: MenuError) -> MenuError {
        if err == MenuError::Validation(ValidationError::AlreadyPending) {
            return err;
        }
        error!("{}: {}", context, err);
        let message = if err.is_validation() {
            err.user_message()
        } else {
            format!("{}: {}", context, err.user_message())
        };
        self.state.write(|s| s.notice = Some(Notice::error(message)));
        err
    }
}
