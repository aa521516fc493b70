pub mod create_reminder;
pub mod send_due_reminders;

pub use create_reminder::CreateReminderUseCase;
pub use send_due_reminders::{DeliveryReport, SendDueRemindersUseCase};
