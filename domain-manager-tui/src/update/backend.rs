//! 后端结果处理

use domain_manager_core::{CoreError, QueryEvent};

use crate::i18n::t;
use crate::message::BackendMessage;
use crate::model::App;

/// 处理后端返回的消息
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::Query(event) => handle_query(app, event),

        BackendMessage::Created(result) => match result {
            Ok(record) => {
                log::info!("Domain created: {} ({})", record.domain, record.id);
                app.drawer.close();
                app.notify_success(t().notify.created);
            }
            Err(e) => {
                // 抽屉保持打开，输入保留以便重试
                app.drawer.submitting = false;
                app.notify_error(failure(t().notify.create_failed, &e));
            }
        },

        BackendMessage::Verified { domain, result } => match result {
            Ok(_) => {
                log::info!("Domain verified: {domain}");
                app.notify_success(t().notify.verified);
            }
            Err(e) => app.notify_error(failure(t().notify.verify_failed, &e)),
        },

        BackendMessage::Deleted { domain, result } => match result {
            Ok(()) => {
                log::info!("Domain deleted: {domain}");
                app.notify_success(t().notify.deleted);
            }
            Err(e) => app.notify_error(failure(t().notify.delete_failed, &e)),
        },
    }
}

/// 处理列表查询状态变化
fn handle_query(app: &mut App, event: QueryEvent) {
    match event {
        QueryEvent::DomainsFetching => app.domains.begin_fetch(),
        QueryEvent::DomainsLoaded(records) => app.domains.set_records(records),
        QueryEvent::DomainsFailed(e) => {
            let message = e.display_message().to_string();
            app.domains.set_error(message.clone());
            app.notify_error(format!("{}: {message}", t().notify.load_failed));
        }
    }
}

fn failure(prefix: &str, error: &CoreError) -> String {
    format!("{prefix}: {}", error.user_message())
}
