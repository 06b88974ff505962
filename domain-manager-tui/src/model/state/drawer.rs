//! 创建抽屉状态

/// 抽屉内的焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerField {
    /// 域名输入框
    #[default]
    Domain,
    /// 提交按钮
    Submit,
    /// 取消按钮
    Cancel,
}

impl DrawerField {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Domain => Self::Submit,
            Self::Submit => Self::Cancel,
            Self::Cancel => Self::Domain,
        }
    }
}

/// 创建抽屉状态
#[derive(Debug, Default)]
pub struct DrawerState {
    /// 是否打开
    pub open: bool,
    /// 域名输入
    pub domain: String,
    /// 当前焦点
    pub focus: DrawerField,
    /// 校验错误（显示在输入框下方）
    pub error: Option<String>,
    /// 创建请求进行中
    pub submitting: bool,
}

impl DrawerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开抽屉（表单为空）
    pub fn show(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    /// 关闭并清空表单
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// 输入字符，清除上一次的校验错误
    pub fn input(&mut self, c: char) {
        self.domain.push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.domain.pop();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_clears_error() {
        let mut drawer = DrawerState::new();
        drawer.show();
        drawer.error = Some("Please enter a domain".to_string());

        drawer.input('a');
        assert!(drawer.error.is_none());
        assert_eq!(drawer.domain, "a");
    }

    #[test]
    fn close_resets_form() {
        let mut drawer = DrawerState::new();
        drawer.show();
        drawer.input('x');
        drawer.focus = DrawerField::Cancel;

        drawer.close();
        assert!(!drawer.is_open());
        assert!(drawer.domain.is_empty());
        assert_eq!(drawer.focus, DrawerField::Domain);
    }

    #[test]
    fn focus_cycles() {
        assert_eq!(DrawerField::Domain.next(), DrawerField::Submit);
        assert_eq!(DrawerField::Cancel.next(), DrawerField::Domain);
    }
}
