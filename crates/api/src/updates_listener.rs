use crate::dispatcher::UpdateDispatcher;
use actix_web::rt::time::sleep;
use remindme_bot_infra::BotContext;
use std::time::Duration;
use tracing::error;

/// Pause after a failed poll so an unreachable transport is not hammered
const UPDATES_ERROR_PAUSE: Duration = Duration::from_secs(5);

pub fn start_updates_listener(ctx: BotContext) {
    actix_web::rt::spawn(async move {
        let dispatcher = UpdateDispatcher::new(ctx.clone());
        let mut offset = 0;
        loop {
            offset = poll_updates(&ctx, &dispatcher, offset).await;
        }
    });
}

/// Fetches one batch of updates, dispatches it and returns the offset
/// of the next poll
pub async fn poll_updates(ctx: &BotContext, dispatcher: &UpdateDispatcher, offset: i64) -> i64 {
    match ctx.updates.get_updates(offset).await {
        Ok(updates) => dispatcher.process(&updates).await.next_offset(offset),
        Err(e) => {
            error!("Unable to fetch updates from offset {}: {:?}", offset, e);
            sleep(UPDATES_ERROR_PAUSE).await;
            offset
        }
    }
}
