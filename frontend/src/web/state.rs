//! 视图模型状态的响应式容器

use leptos::prelude::*;
use wavescan::{CatalogState, StateCell};

/// 用 `ArcRwSignal` 承载 [`CatalogState`]
///
/// 引用计数信号不会随组件 owner 一起销毁，卸载后仍在进行的请求回写也不会 panic。
#[derive(Clone)]
pub struct SignalCell(ArcRwSignal<CatalogState>);

impl SignalCell {
    pub fn new() -> Self {
        Self(ArcRwSignal::new(CatalogState::new()))
    }

    /// 供视图读取的 Copy 句柄
    pub fn signal(&self) -> RwSignal<CatalogState> {
        RwSignal::from(self.0.clone())
    }
}

impl StateCell for SignalCell {
    fn read<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> R {
        let mut guard = self.0.write();
        f(&mut guard)
    }
}
