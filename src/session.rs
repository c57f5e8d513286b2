//! 会话持久化
//!
//! 浏览器里由 LocalStorage 实现，核心库与测试使用内存实现。
//! token 不做过期校验，只在显式清除时删除。

use std::cell::RefCell;
use std::rc::Rc;
use wavescan_shared::Session;

pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// 内存会话存储
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    inner: Rc<RefCell<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Some(session))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.inner.borrow().clone()
    }

    fn save(&self, session: &Session) {
        *self.inner.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        *self.inner.borrow_mut() = None;
    }
}
