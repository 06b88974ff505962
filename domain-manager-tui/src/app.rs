//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                               ▲                │              │
//！│         │          ┌─────────┐     ┌────┴─────┐          ▼              │
//！│         │          │  Util   │     │ Backend  │ ◀── Command ──┐         │
//！│         │          │  层     │     │   层     │               │         │
//！│         │          └─────────┘     └──────────┘     ┌─────────┴┐        │
//！│         │                                           │  Model   │        │
//！│         │          ┌─────────┐                      │   层     │        │
//！│         └──────────│  View   │ ◀──── 读取状态 ───── └──────────┘        │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/app.rs
//! 主循环
//!
//! 每一轮：
//!     1. 渲染 UI
//!     2. 检查退出标志
//!     3. 处理后端送回的结果（非阻塞）
//!     4. 轮询输入事件（最长 100ms），翻译为消息并更新
//!     5. 节拍：让过期的通知消失
//!     6. 取出 Update 排入的命令，交给 Backend 层执行
//!

use std::time::Duration;

use anyhow::Result;

use crate::backend::CoreService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub fn run(terminal: &mut Term, app: &mut App, core: &mut CoreService) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 后端结果
        while let Some(msg) = core.try_recv() {
            update::update(app, msg);
        }

        // 4. 轮询事件
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        // 5. 节拍
        update::update(app, AppMessage::Tick);

        // 6. 执行命令
        for command in app.take_commands() {
            core.execute(command);
        }
    }

    Ok(())
}
