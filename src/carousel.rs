//! 菜单轮播
//!
//! 只维护下标；定时器由前端持有。只有一个条目时既不自动轮换，也不循环。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 是否需要挂定时器
    pub fn auto_rotates(&self) -> bool {
        self.len > 1
    }

    /// 首尾是否相连（同时决定前进/后退按钮是否显示）
    pub fn loops(&self) -> bool {
        self.len > 1
    }

    /// 定时器触发
    pub fn tick(&mut self) {
        if self.auto_rotates() {
            self.advance();
        }
    }

    pub fn advance(&mut self) {
        if self.loops() {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.loops() {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// 越界的下标被忽略
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// 更新条目数；返回值表示数量有变化，旧定时器必须取消
    pub fn set_len(&mut self, len: usize) -> bool {
        if len == self.len {
            return false;
        }
        self.len = len;
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item_never_moves() {
        let mut c = Carousel::new(1);
        assert!(!c.auto_rotates());
        assert!(!c.loops());

        for _ in 0..5 {
            c.tick();
        }
        c.advance();
        c.previous();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_wraps_both_directions() {
        let mut c = Carousel::new(3);
        assert!(c.auto_rotates());

        let seen: Vec<usize> = (0..4)
            .map(|_| {
                c.tick();
                c.index()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 0, 1]);

        c.jump_to(0);
        c.previous();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_jump_out_of_range_ignored() {
        let mut c = Carousel::new(2);
        c.jump_to(1);
        c.jump_to(7);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_set_len_clamps_and_reports_rearm() {
        let mut c = Carousel::new(3);
        c.jump_to(2);

        assert!(!c.set_len(3));
        assert!(c.set_len(4));
        assert_eq!(c.index(), 2);

        assert!(c.set_len(1));
        assert_eq!(c.index(), 0);
        assert!(!c.auto_rotates());

        assert!(c.set_len(2));
        assert!(!c.set_len(2));

        assert!(c.set_len(0));
        assert!(c.is_empty());
        assert_eq!(c.index(), 0);
    }
}
