use crate::configuration::Settings;
use crate::record_store_client::RecordStoreClient;
use crate::routes;
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

// holds the running server along with the port it is bound to
// (the port is chosen by the OS when the config asks for port 0)
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        // one http client for the whole app - the credentials are allowed to
        // be missing here, requests will report the server as misconfigured
        let record_store = &configuration.record_store;
        let credentials = record_store.credentials();
        if credentials.is_none() {
            tracing::warn!(
                "Record store api key or database id missing - waitlist submissions will fail"
            );
        }

        let record_store_client = RecordStoreClient::new(
            record_store.base_url.clone(),
            credentials,
            record_store.api_version.clone(),
            record_store.timeout(),
        )?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, record_store_client)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // only returns when the application is stopped
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Starts the server on `listener`, sharing one record store client between
/// all workers.
///
/// # Errors
///
/// This function will return an error if the server fails to start.
pub fn run(
    listener: TcpListener,
    record_store_client: RecordStoreClient,
) -> Result<Server, std::io::Error> {
    // Wrap the client using web::Data, which boils down to an Arc smart pointer
    // this must be done because the App closure runs once per worker thread
    let record_store_client = web::Data::new(record_store_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default()) // request spans - the subscriber is set up in main
            .route("/health_check", web::get().to(routes::health_check))
            .service(
                web::resource("/api/waitlist")
                    .app_data(routes::waitlist_json_config())
                    .route(web::post().to(routes::join_waitlist)),
            )
            .app_data(record_store_client.clone())
    })
    .listen(listener)? // binds to the port identified by listener
    .run(); // Don't await here - the caller decides when to drive the server

    Ok(server)
}
