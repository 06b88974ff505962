//! 域名表格状态

use domain_manager_api::DomainRecord;
use domain_manager_core::ListQuery;

/// 域名表格状态
#[derive(Debug, Default)]
pub struct DomainsState {
    /// 最近一次拉取到的完整列表
    pub records: Vec<DomainRecord>,
    /// 过滤、排序后用于显示的列表
    pub visible: Vec<DomainRecord>,
    /// 搜索文本与排序方向
    pub query: ListQuery,
    /// 当前选中的索引（相对 `visible`）
    pub selected: usize,
    /// 首次加载中（尚无数据）
    pub loading: bool,
    /// 正在（重新）拉取
    pub fetching: bool,
    /// 最近一次拉取失败的原因
    pub error: Option<String>,
    loaded: bool,
}

impl DomainsState {
    /// 创建新的域名状态（启动时即开始首次加载）
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.visible.is_empty() && self.selected < self.visible.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.visible.is_empty() {
            self.selected = self.visible.len() - 1;
        }
    }

    /// 获取当前选中的域名
    pub fn selected_domain(&self) -> Option<&DomainRecord> {
        self.visible.get(self.selected)
    }

    /// 开始拉取
    pub fn begin_fetch(&mut self) {
        self.fetching = true;
        self.loading = !self.loaded;
    }

    /// 设置域名列表（整体替换）
    pub fn set_records(&mut self, records: Vec<DomainRecord>) {
        self.records = records;
        self.loaded = true;
        self.loading = false;
        self.fetching = false;
        self.error = None;
        self.refresh_visible();
    }

    /// 拉取失败，保留已有数据
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.fetching = false;
        self.error = Some(message.into());
    }

    // ========== 搜索与排序 ==========

    pub fn push_search_char(&mut self, c: char) {
        self.query.search_text.push(c);
        self.refresh_visible();
    }

    pub fn pop_search_char(&mut self) {
        if self.query.search_text.pop().is_some() {
            self.refresh_visible();
        }
    }

    pub fn clear_search(&mut self) {
        if !self.query.search_text.is_empty() {
            self.query.search_text.clear();
            self.refresh_visible();
        }
    }

    pub fn toggle_sort(&mut self) {
        self.query.sort_order = self.query.sort_order.toggle();
        self.refresh_visible();
    }

    /// 重新计算显示列表，尽量保持选中同一条记录
    fn refresh_visible(&mut self) {
        let selected_id = self.selected_domain().map(|r| r.id.clone());
        self.visible = self.query.apply(&self.records);
        self.selected = selected_id
            .and_then(|id| self.visible.iter().position(|r| r.id == id))
            .unwrap_or(0)
            .min(self.visible.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use domain_manager_api::DomainStatus;
    use domain_manager_core::SortOrder;

    use super::*;

    fn record(id: &str, domain: &str, created: i64) -> DomainRecord {
        DomainRecord {
            id: id.to_string(),
            domain: domain.to_string(),
            is_active: true,
            status: DomainStatus::Unverified,
            created_date: Some(created),
        }
    }

    fn sample() -> Vec<DomainRecord> {
        vec![
            record("1", "alpha.com", 100),
            record("2", "beta.org", 300),
            record("3", "alpha.net", 200),
        ]
    }

    #[test]
    fn first_load_then_refetch() {
        let mut state = DomainsState::new();
        assert!(state.loading);

        state.set_records(sample());
        assert!(!state.loading);

        state.begin_fetch();
        assert!(state.fetching);
        // 已有数据时不再显示首次加载
        assert!(!state.loading);
    }

    #[test]
    fn visible_is_newest_first() {
        let mut state = DomainsState::new();
        state.set_records(sample());
        let ids: Vec<_> = state.visible.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "1"]);
    }

    #[test]
    fn search_filters_and_clamps_selection() {
        let mut state = DomainsState::new();
        state.set_records(sample());
        state.select_last();

        for c in "ALPHA".chars() {
            state.push_search_char(c);
        }
        assert_eq!(state.visible.len(), 2);
        assert!(state.selected < state.visible.len());

        state.clear_search();
        assert_eq!(state.visible.len(), 3);
    }

    #[test]
    fn selection_follows_record_across_sort() {
        let mut state = DomainsState::new();
        state.set_records(sample());
        state.select_first(); // id 2

        state.toggle_sort();
        assert_eq!(state.query.sort_order, SortOrder::Asc);
        assert_eq!(state.selected_domain().map(|r| r.id.as_str()), Some("2"));
    }

    #[test]
    fn error_keeps_previous_records() {
        let mut state = DomainsState::new();
        state.set_records(sample());
        state.begin_fetch();
        state.set_error("HTTP 500: Request failed");

        assert_eq!(state.records.len(), 3);
        assert!(!state.fetching);
        assert!(state.error.is_some());
    }

    #[test]
    fn refetch_replaces_list() {
        let mut state = DomainsState::new();
        state.set_records(sample());
        state.set_records(vec![record("9", "only.com", 1)]);
        assert_eq!(state.visible.len(), 1);
        assert_eq!(state.selected, 0);
    }
}
