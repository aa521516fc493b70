use chrono::NaiveDateTime;
use remindme_bot_api::Application;
use remindme_bot_infra::{BotContext, InMemoryMessenger, InMemoryUpdatesSource, StaticTimeSys};
use std::sync::Arc;

pub struct TestApp {
    pub ctx: BotContext,
    pub messenger: Arc<InMemoryMessenger>,
    pub updates: Arc<InMemoryUpdatesSource>,
    pub address: String,
}

// Launch the application as a background task with an inmemory
// transport and the clock frozen at `now`
pub async fn spawn_app(now: NaiveDateTime) -> TestApp {
    let messenger = Arc::new(InMemoryMessenger::new());
    let updates = Arc::new(InMemoryUpdatesSource::new());

    let mut ctx = BotContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.sys = Arc::new(StaticTimeSys(now));
    ctx.messenger = messenger.clone();
    ctx.updates = updates.clone();

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    TestApp {
        ctx,
        messenger,
        updates,
        address,
    }
}
