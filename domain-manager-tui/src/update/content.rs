//! 表格更新逻辑

use domain_manager_api::DomainRecord;
use domain_manager_core::actions::{self, RowAction, RowEffect};

use crate::backend::Command;
use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::{App, FocusPanel};

/// 处理表格消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.domains.select_previous(),
        ContentMessage::SelectNext => app.domains.select_next(),
        ContentMessage::SelectFirst => app.domains.select_first(),
        ContentMessage::SelectLast => app.domains.select_last(),

        ContentMessage::OpenActions => {
            if let Some(record) = app.domains.selected_domain().cloned() {
                app.modal.show_action_menu(record);
            }
        }

        ContentMessage::Add => {
            app.drawer.show();
        }

        ContentMessage::Verify => {
            if let Some(record) = app.domains.selected_domain().cloned() {
                run_action(app, RowAction::Verify, &record);
            }
        }

        ContentMessage::Delete => {
            if let Some(record) = app.domains.selected_domain().cloned() {
                run_action(app, RowAction::Delete, &record);
            }
        }

        ContentMessage::ToggleSort => {
            app.domains.toggle_sort();
        }

        ContentMessage::FocusSearch => {
            app.focus = FocusPanel::Search;
        }
    }
}

/// 执行行操作（表格快捷键与操作菜单共用）
pub(super) fn run_action(app: &mut App, action: RowAction, record: &DomainRecord) {
    if action == RowAction::Verify && record.status.is_verified() {
        app.notify_info(t().notify.already_verified);
        return;
    }

    match actions::dispatch(action, record) {
        RowEffect::None => match action {
            RowAction::Install => app.notify_info(t().notify.install_unavailable),
            _ => app.notify_info(t().notify.view_unavailable),
        },
        RowEffect::Update { id, patch } => {
            app.push_command(Command::VerifyDomain {
                id,
                domain: record.domain.clone(),
                patch,
            });
        }
        RowEffect::ConfirmDelete { id, domain } => {
            app.modal.show_confirm_delete(&id, &domain);
        }
    }
}
