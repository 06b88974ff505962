//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ DrawerMsg │          ┌──────────┐         │   │
//！│  │   │  View   │          │ SearchMsg │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ Command          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │domain-manager-core│           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//! Update 层本身不做任何 IO：需要访问远程 API 时，只把 Command 排入
//! `app.commands`，由主循环交给 Backend 层执行；结果以 BackendMessage
//! 的形式回到这里。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;            // 后端结果处理
//!         mod content;            // 表格子消息处理
//!         mod drawer;             // 创建抽屉子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod search;             // 搜索框子消息处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!         即主更新函数。
//!             使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!             复杂的子消息委托给子模块处理。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 返回（GoBack）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Esc 按层级逐层返回：
//!         弹窗  ──▶  抽屉  ──▶  搜索框焦点
//!
//!     抽屉在创建请求进行中时不会被关闭。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 后端结果（backend.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     - Query(..)     列表查询状态：加载中 / 成功（整体替换）/ 失败
//!     - Created(..)   成功关闭抽屉；失败保留抽屉与输入
//!     - Verified{..}  成功 / 失败通知
//!     - Deleted{..}   成功 / 失败通知
//!
//!     写操作成功后的列表刷新由缓存失效驱动，结果同样经 Query(..) 送达。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod backend;
mod content;
mod drawer;
mod modal;
mod search;

use std::time::Instant;

use crate::backend::Command;
use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 有弹窗或抽屉时不切换焦点
            if !app.modal.is_open() && !app.drawer.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
        }

        AppMessage::Drawer(drawer_msg) => {
            drawer::update(app, drawer_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(backend_msg) => {
            backend::update(app, backend_msg);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
            } else if app.drawer.is_open() {
                if !app.drawer.submitting {
                    app.drawer.close();
                }
            } else if app.focus.is_search() {
                app.focus = FocusPanel::Table;
            }
        }

        AppMessage::Refresh => {
            app.domains.begin_fetch();
            app.push_command(Command::RefreshDomains);
            app.notify_info(t().notify.refreshing);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Tick => {
            app.expire_notification(Instant::now());
        }

        AppMessage::Noop => {}
    }
}
