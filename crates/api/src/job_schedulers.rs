use crate::{reminder::SendDueRemindersUseCase, shared::usecase::execute};
use actix_web::rt::time::sleep;
use chrono::NaiveDateTime;
use remindme_bot_infra::BotContext;
use std::time::Duration;
use tracing::warn;

pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Wakes up right after every wall clock minute boundary and sends the
/// reminders due in that minute. The delay is computed from the clock on
/// every iteration so the job never drifts into the previous minute.
pub fn start_send_reminders_job(ctx: BotContext) {
    actix_web::rt::spawn(async move {
        let mut last_run: Option<NaiveDateTime> = None;
        loop {
            let now = ctx.sys.get_timestamp_millis();
            let secs_to_next_run = get_start_delay(now as usize, 0);
            sleep(Duration::from_secs(secs_to_next_run as u64)).await;

            last_run = run_minute(&ctx, last_run).await;
        }
    });
}

/// Sends the reminders of the current minute unless that minute was
/// already handled. Returns the last minute that was handled.
async fn run_minute(
    ctx: &BotContext,
    last_run: Option<NaiveDateTime>,
) -> Option<NaiveDateTime> {
    let usecase = SendDueRemindersUseCase::for_current_minute(ctx.sys.as_ref());
    let due_at = usecase.due_at;
    if !should_run(last_run, due_at) {
        warn!(
            "Reminders due at {} were already sent, skipping this run",
            due_at
        );
        return last_run;
    }

    // Errors are logged by `execute`, the next minute is a new try
    let _ = execute(usecase, ctx).await;
    Some(due_at)
}

/// A minute is only handled once, also when the clock is set back
fn should_run(last_run: Option<NaiveDateTime>, due_at: NaiveDateTime) -> bool {
    match last_run {
        Some(last_run) => due_at > last_run,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::{datetime, setup, UnavailableReminderRepo};
    use chrono::Duration as ChronoDuration;
    use std::sync::Arc;

    #[test]
    fn start_delay_works() {
        assert_eq!(get_start_delay(50 * 1000, 5), 5);
        assert_eq!(get_start_delay(50 * 1000, 10), 60);
        assert_eq!(get_start_delay(50 * 1000, 15), 55);
        assert_eq!(get_start_delay(60 * 1000, 60), 60);
        assert_eq!(get_start_delay(60 * 1000, 10), 50);
        assert_eq!(get_start_delay(59 * 1000, 0), 1);
        assert_eq!(get_start_delay(59 * 1000, 1), 60);
    }

    #[test]
    fn start_delay_lands_after_the_minute_boundary() {
        // 59.999 seconds into a minute
        let now = 120 * 1000 + 59_999;
        let delay_millis = get_start_delay(now, 0) * 1000;
        assert!(now + delay_millis >= 180 * 1000);
        assert!(now + delay_millis < 181 * 1000);
    }

    #[test]
    fn runs_every_minute_once() {
        let t = datetime(2022, 1, 1, 20, 0);
        assert!(should_run(None, t));
        assert!(should_run(Some(t - ChronoDuration::minutes(1)), t));
        assert!(!should_run(Some(t), t));
        assert!(!should_run(Some(t + ChronoDuration::minutes(1)), t));
    }

    #[actix_web::test]
    async fn run_minute_sends_the_current_minute_once() {
        let now = datetime(2022, 1, 1, 20, 0) + ChronoDuration::seconds(1);
        let test = setup(now);
        let reminders = &test.ctx.repos.reminders;
        reminders
            .create(42, "X", datetime(2022, 1, 1, 20, 0))
            .await
            .unwrap();
        reminders
            .create(42, "later", datetime(2022, 1, 1, 20, 1))
            .await
            .unwrap();

        let last_run = run_minute(&test.ctx, None).await;
        assert_eq!(last_run, Some(datetime(2022, 1, 1, 20, 0)));
        let sent = test.messenger.sent_messages();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].chat_id, 42);
        assert!(sent[0].text.contains("X"));

        // Same minute again, e.g. the clock was set back
        let last_run = run_minute(&test.ctx, last_run).await;
        assert_eq!(last_run, Some(datetime(2022, 1, 1, 20, 0)));
        assert_eq!(test.messenger.sent_messages().len(), 1);
    }

    #[actix_web::test]
    async fn run_minute_moves_on_after_storage_failure() {
        let mut test = setup(datetime(2022, 1, 1, 20, 0));
        test.ctx.repos.reminders = Arc::new(UnavailableReminderRepo);

        let last_run = run_minute(&test.ctx, None).await;

        assert_eq!(last_run, Some(datetime(2022, 1, 1, 20, 0)));
        assert!(test.messenger.sent_messages().is_empty());
    }
}
