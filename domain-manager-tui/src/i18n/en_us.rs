//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, ConfirmDeleteTexts, DomainsTexts, DrawerTexts, HelpTexts, HintActionTexts,
    HintTexts, KeyNames, ModalTexts, NotifyTexts, RowActionTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Domain Manager",
        cancel: "Cancel",
        clear: "Clear",
        confirm: "Confirm",
        close: "Close",
        delete: "Delete",
        loading: "Loading...",
        quit: "Quit",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_ud: "↑↓",
            arrows_lr: "←→",
        },
        actions: HintActionTexts {
            select: "Select",
            actions: "Actions",
            add: "Add",
            search: "Search",
            sort: "Sort",
            refresh: "Refresh",
            help: "Help",
            submit: "Submit",
            switch_button: "Switch",
            done: "Done",
        },
    },

    // ========================================================================
    // 域名表格
    // ========================================================================
    domains: DomainsTexts {
        title: "DOMAINS",
        add_domain: "Add Domain",
        search: "Search",
        search_placeholder: "Type / to search",
        order_asc: "Order by Ascending",
        order_desc: "Order by Descending",
        col_domain: "Domain URL",
        col_active: "Active Status",
        col_status: "Verification Status",
        col_created: "Created",
        active: "Active",
        not_active: "Not Active",
        verified: "Verified",
        not_verified: "Not Verified",
        no_domains: "No domains yet",
        no_match: "No domains match the search",
        refreshing: "Refreshing...",
        load_failed: "Failed to load domains",
        retry_hint: "Press Alt+r to retry",
    },

    // ========================================================================
    // 行操作
    // ========================================================================
    actions: RowActionTexts {
        view: "View Pages",
        verify: "Verify",
        install: "Install Script",
        delete: "Delete",
    },

    // ========================================================================
    // 创建抽屉
    // ========================================================================
    drawer: DrawerTexts {
        title: "Add Domain",
        domain_label: "Domain",
        domain_placeholder: "e.g. example.com",
        domain_required: "Please enter a domain",
        submit: "Add Domain",
        submitting: "Adding...",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirm Deletion",
            message: "Are you sure you want to delete this domain?",
        },
        action_menu_title: "Actions",
        press_esc_to_close: "Press Esc to close",
    },

    // ========================================================================
    // 通知
    // ========================================================================
    notify: NotifyTexts {
        created: "Domain added successfully",
        create_failed: "Failed to add domain",
        verified: "Domain verified successfully",
        verify_failed: "Failed to verify domain",
        already_verified: "Domain is already verified",
        deleted: "Domain deleted successfully",
        delete_failed: "Failed to delete domain",
        load_failed: "Failed to load domains",
        refreshing: "Refreshing...",
        view_unavailable: "Viewing pages is not available yet",
        install_unavailable: "Installing the script is not available yet",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        table_section: "Domain table",
        drawer_section: "Add Domain drawer",
        move_selection: "Move selection",
        open_actions: "Open row actions",
        add_domain: "Add domain",
        verify_selected: "Verify selected",
        delete_selected: "Delete selected",
        search: "Search",
        toggle_sort: "Toggle sort order",
        refresh: "Refresh",
        quit: "Quit",
        submit_form: "Submit",
        cancel_form: "Cancel",
    },
};
