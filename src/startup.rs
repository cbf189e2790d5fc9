use crate::configuration::Settings;
use crate::error::BizErrorEnum;
use crate::notification_client::{NotificationClient, SubmissionNotifier};
use crate::routes;
use crate::submission_store::{RestSubmissionStore, SubmissionStore};
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

// A new type to hold the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Wire the hosted backend's collaborators into a bound, not yet running server.
    ///
    /// Bad backend settings fail here, before a single request is served.
    pub async fn build(config: Settings) -> Result<Self, BizErrorEnum> {
        let store: Arc<dyn SubmissionStore> = Arc::new(RestSubmissionStore::new(&config.backend)?);
        let notifier: Arc<dyn SubmissionNotifier> =
            Arc::new(NotificationClient::new(&config.backend)?);

        // 0.0.0.0 as host to instruct our application to accept connections from any network interface,
        // not just the local one.
        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address).map_err(|e| {
            tracing::error!("Failed to bind to TcpListener");
            BizErrorEnum::BindTcpListenerError(e)
        })?;
        let port = listener
            .local_addr()
            .map_err(BizErrorEnum::BindTcpListenerError)?
            .port();

        let server = run(listener, store, notifier)?;

        // We "save" the bound port in one of `Application`'s fields
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), BizErrorEnum> {
        self.server.await.map_err(|e| {
            tracing::error!("Failed to run server.");
            BizErrorEnum::RunServerError(e)
        })
    }
}

fn run(
    listener: TcpListener,
    store: Arc<dyn SubmissionStore>,
    notifier: Arc<dyn SubmissionNotifier>,
) -> Result<Server, BizErrorEnum> {
    // Share one store and one notifier (and their http clients) across workers
    let store = web::Data::from(store);
    let notifier = web::Data::from(notifier);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(store.clone())
            .app_data(notifier.clone())
            .route("/", web::get().to(routes::home))
            .route("/signup", web::post().to(routes::signup))
            .route(
                "/signup/confirmation",
                web::get().to(routes::signup_confirmation),
            )
            .route("/health_check", web::get().to(routes::health_check))
    })
    .listen(listener)
    .map_err(|e| {
        tracing::error!("Failed to listen to TcpListener");
        BizErrorEnum::ListenTcpListenerError(e)
    })?
    .run();

    // No .await here!
    Ok(server)
}
