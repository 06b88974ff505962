//! 创建抽屉更新逻辑

use domain_manager_core::form::validate_domain_input;

use crate::backend::Command;
use crate::i18n::t;
use crate::message::DrawerMessage;
use crate::model::{App, DrawerField};

/// 处理抽屉消息
pub fn update(app: &mut App, msg: DrawerMessage) {
    if !app.drawer.is_open() {
        return;
    }

    match msg {
        DrawerMessage::Input(c) => {
            if app.drawer.focus == DrawerField::Domain && !app.drawer.submitting {
                app.drawer.input(c);
            }
        }

        DrawerMessage::Backspace => {
            if app.drawer.focus == DrawerField::Domain && !app.drawer.submitting {
                app.drawer.backspace();
            }
        }

        DrawerMessage::NextField => {
            app.drawer.focus = app.drawer.focus.next();
        }

        DrawerMessage::Confirm => match app.drawer.focus {
            DrawerField::Domain | DrawerField::Submit => submit(app),
            DrawerField::Cancel => cancel(app),
        },

        DrawerMessage::Cancel => cancel(app),
    }
}

/// 校验并提交
fn submit(app: &mut App) {
    // 请求进行中
    if app.drawer.submitting {
        return;
    }

    match validate_domain_input(&app.drawer.domain) {
        Ok(input) => {
            app.drawer.error = None;
            app.drawer.submitting = true;
            app.push_command(Command::CreateDomain {
                domain: input.domain,
            });
        }
        Err(e) => {
            log::debug!("Create form rejected: {e}");
            app.drawer.error = Some(t().drawer.domain_required.to_string());
            app.drawer.focus = DrawerField::Domain;
        }
    }
}

fn cancel(app: &mut App) {
    if !app.drawer.submitting {
        app.drawer.close();
    }
}
