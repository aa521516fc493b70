mod dispatcher;
mod job_schedulers;
mod reminder;
mod shared;
mod status;
mod updates_listener;

use actix_web::{dev::Server, web, App, HttpServer};
use job_schedulers::start_send_reminders_job;
use remindme_bot_infra::BotContext;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;
use updates_listener::start_updates_listener;

pub use dispatcher::{ConfirmedUpdates, UpdateDispatcher};
pub use reminder::{CreateReminderUseCase, DeliveryReport, SendDueRemindersUseCase};
pub use shared::usecase::{execute, Subscriber, UseCase};
pub use status::get_service_health;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: BotContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.config.port).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: BotContext) {
        start_send_reminders_job(context.clone());
        start_updates_listener(context);
    }

    async fn configure_server(port: u16) -> Result<(Server, u16), std::io::Error> {
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(2)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
