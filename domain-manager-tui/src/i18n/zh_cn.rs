//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, ConfirmDeleteTexts, DomainsTexts, DrawerTexts, HelpTexts, HintActionTexts,
    HintTexts, KeyNames, ModalTexts, NotifyTexts, RowActionTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "域名管理",
        cancel: "取消",
        clear: "清空",
        confirm: "确认",
        close: "关闭",
        delete: "删除",
        loading: "加载中...",
        quit: "退出",
    },

    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_ud: "↑↓",
            arrows_lr: "←→",
        },
        actions: HintActionTexts {
            select: "选择",
            actions: "操作",
            add: "添加",
            search: "搜索",
            sort: "排序",
            refresh: "刷新",
            help: "帮助",
            submit: "提交",
            switch_button: "切换",
            done: "完成",
        },
    },

    domains: DomainsTexts {
        title: "域名",
        add_domain: "添加域名",
        search: "搜索",
        search_placeholder: "按 / 搜索",
        order_asc: "按时间升序",
        order_desc: "按时间降序",
        col_domain: "域名地址",
        col_active: "启用状态",
        col_status: "验证状态",
        col_created: "创建时间",
        active: "已启用",
        not_active: "未启用",
        verified: "已验证",
        not_verified: "未验证",
        no_domains: "暂无域名",
        no_match: "没有匹配的域名",
        refreshing: "刷新中...",
        load_failed: "加载域名失败",
        retry_hint: "按 Alt+r 重试",
    },

    actions: RowActionTexts {
        view: "查看页面",
        verify: "验证",
        install: "安装脚本",
        delete: "删除",
    },

    drawer: DrawerTexts {
        title: "添加域名",
        domain_label: "域名",
        domain_placeholder: "例如 example.com",
        domain_required: "请输入域名",
        submit: "添加域名",
        submitting: "添加中...",
    },

    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "确认删除",
            message: "确定要删除这个域名吗？",
        },
        action_menu_title: "操作",
        press_esc_to_close: "按 Esc 关闭",
    },

    notify: NotifyTexts {
        created: "域名添加成功",
        create_failed: "添加域名失败",
        verified: "域名验证成功",
        verify_failed: "验证域名失败",
        already_verified: "域名已验证",
        deleted: "域名删除成功",
        delete_failed: "删除域名失败",
        load_failed: "加载域名失败",
        refreshing: "刷新中...",
        view_unavailable: "查看页面功能暂未开放",
        install_unavailable: "安装脚本功能暂未开放",
    },

    help: HelpTexts {
        title: "帮助",
        table_section: "域名表格",
        drawer_section: "添加域名抽屉",
        move_selection: "移动选中项",
        open_actions: "打开行操作",
        add_domain: "添加域名",
        verify_selected: "验证选中项",
        delete_selected: "删除选中项",
        search: "搜索",
        toggle_sort: "切换排序",
        refresh: "刷新",
        quit: "退出",
        submit_form: "提交",
        cancel_form: "取消",
    },
};
