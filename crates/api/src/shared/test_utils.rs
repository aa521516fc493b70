use chrono::{NaiveDate, NaiveDateTime};
use remindme_bot_domain::{Reminder, ID};
use remindme_bot_infra::{
    BotContext, IReminderRepo, InMemoryMessenger, InMemoryReminderRepo, StaticTimeSys,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

pub struct TestContext {
    pub ctx: BotContext,
    pub messenger: Arc<InMemoryMessenger>,
}

/// Inmemory context with the clock frozen at `now`
pub fn setup(now: NaiveDateTime) -> TestContext {
    let messenger = Arc::new(InMemoryMessenger::new());
    let mut ctx = BotContext::create_inmemory();
    ctx.sys = Arc::new(StaticTimeSys(now));
    ctx.messenger = messenger.clone();

    TestContext { ctx, messenger }
}

/// Store whose medium is never available
pub struct UnavailableReminderRepo;

#[async_trait::async_trait]
impl IReminderRepo for UnavailableReminderRepo {
    async fn create(&self, _: i64, _: &str, _: NaiveDateTime) -> anyhow::Result<ID> {
        anyhow::bail!("connection refused")
    }

    async fn find_due_at(&self, _: NaiveDateTime) -> anyhow::Result<Vec<Reminder>> {
        anyhow::bail!("connection refused")
    }
}

/// Inmemory store that counts how many reminders were created through it
#[derive(Default)]
pub struct CountingReminderRepo {
    inner: InMemoryReminderRepo,
    creates: AtomicUsize,
}

impl CountingReminderRepo {
    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl IReminderRepo for CountingReminderRepo {
    async fn create(&self, chat_id: i64, text: &str, due_at: NaiveDateTime) -> anyhow::Result<ID> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(chat_id, text, due_at).await
    }

    async fn find_due_at(&self, due_at: NaiveDateTime) -> anyhow::Result<Vec<Reminder>> {
        self.inner.find_due_at(due_at).await
    }
}
