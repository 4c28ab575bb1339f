// SPDX-License-Identifier: MPL-2.0
//! Toast notification system: severity-tagged messages with auto-dismiss,
//! a bounded set of visible toasts, and a FIFO overflow queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
