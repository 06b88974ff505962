//! 弹窗更新逻辑

use domain_manager_core::RowAction;

use super::content::run_action;
use crate::backend::Command;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ActionMenu { .. } => handle_action_menu(app, msg),
        Modal::ConfirmDelete { .. } => handle_confirm_delete(app, msg),
        Modal::Help => handle_simple_modal(app, msg),
    }
}

/// 处理行操作菜单
fn handle_action_menu(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ActionMenu {
        ref record,
        ref mut selected,
    }) = app.modal.active
    else {
        return;
    };

    let total = RowAction::ALL.len();

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::SelectPrevious => {
            *selected = (*selected + total - 1) % total;
        }

        ModalMessage::SelectNext => {
            *selected = (*selected + 1) % total;
        }

        ModalMessage::Confirm => {
            let Some(action) = RowAction::ALL.get(*selected).copied() else {
                return;
            };
            let record = record.clone();
            // 先关闭菜单，删除操作会再打开确认弹窗
            app.modal.close();
            run_action(app, action, &record);
        }

        ModalMessage::ToggleDeleteFocus => {}
    }
}

/// 处理确认删除弹窗
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete {
        ref id,
        ref domain,
        ref mut focus,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::ToggleDeleteFocus
        | ModalMessage::SelectPrevious
        | ModalMessage::SelectNext => {
            *focus = 1 - *focus;
        }

        ModalMessage::Confirm => {
            // focus: 0=取消, 1=确认
            if *focus == 1 {
                let command = Command::DeleteDomain {
                    id: id.clone(),
                    domain: domain.clone(),
                };
                app.push_command(command);
            }
            app.modal.close();
        }
    }
}

/// 处理只能关闭的弹窗（帮助）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}
