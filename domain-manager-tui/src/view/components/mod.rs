//! 可复用的界面组件

pub mod drawer;
pub mod modal;
pub mod statusbar;
pub mod toolbar;

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// 计算居中弹窗区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 按显示宽度截断文本（CJK 字符占两列）
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        // 留一列给省略号
        if width + w + 1 > max_width {
            break;
        }
        result.push(c);
        width += w;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(40, 4, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.y, 3);
    }

    #[test]
    fn truncate_counts_display_width() {
        assert_eq!(truncate_to_width("example.com", 20), "example.com");
        assert_eq!(truncate_to_width("example.com", 5), "exam…");
        // 每个汉字占两列
        assert_eq!(truncate_to_width("中文域名", 5), "中文…");
    }
}
