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
//！│      │  终端   │                                │ Backend  │ ──▶ BackendMsg│
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └──────────┘              │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event ──▶ Update 之间的桥梁，同时也是 Backend ──▶ Update 的桥梁。
//! 所有的用户操作和异步结果都通过 Message 来表达。
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod backend;        // 后端结果
//!         mod content;        // 表格
//!         mod drawer;         // 创建抽屉
//!         mod modal;          // 弹窗
//!         mod search;         // 搜索框
//!
//!
//!     消息来源有两个：
//!         · event/handler.rs   把按键翻译成消息
//!         · backend            把异步任务的结果包装成 AppMessage::Backend(...)
//!
//!     主循环在每一轮中先处理后端消息，再处理按键，最后发送一次 Tick。
//!

mod app;
mod backend;
mod content;
mod drawer;
mod modal;
mod search;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use content::ContentMessage;
pub use drawer::DrawerMessage;
pub use modal::ModalMessage;
pub use search::SearchMessage;
