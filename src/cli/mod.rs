//! CLI command implementations

pub mod browse;
pub mod init;
pub mod page;
pub mod select;

use artgrid::Notification;

/// Print notifications the way a toast would show them: one line each
pub(crate) fn print_notifications(notifications: &[Notification]) {
    for notification in notifications {
        if notification.is_error() {
            eprintln!("{}", notification);
        } else {
            println!("{}", notification);
        }
    }
}
