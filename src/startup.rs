use std::{io, net};

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::registry::ActivityRegistry;
use crate::routes::{
    activities, app_script, healthcheck, home, index_page, signup, stylesheet, unregister,
};

/// Application
pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    /// Build an application based on settings, seeded with the default roster
    pub fn build(config: &Settings) -> anyhow::Result<Self> {
        Self::build_with_registry(config, ActivityRegistry::with_default_roster())
    }

    /// Build an application based on settings and an activity registry
    pub fn build_with_registry(
        config: &Settings,
        registry: ActivityRegistry,
    ) -> anyhow::Result<Self> {
        // Run the HTTP server and return its data
        let listener = net::TcpListener::bind(format!(
            "{}:{}",
            config.application.app_host, config.application.app_port
        ))?;
        let port = listener.local_addr()?.port();
        let server = run_server(listener, registry)?;
        Ok(Self { server, port })
    }

    /// Get application port
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Run application until it is stopped
    pub async fn run_until_stopped(self) -> io::Result<()> {
        self.server.await
    }
}

/// Run the HTTP server
pub fn run_server(listener: net::TcpListener, registry: ActivityRegistry) -> anyhow::Result<Server> {
    // Prepare data to be added to the application context
    let registry = web::Data::new(registry);

    // Start the HTTP server
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/healthcheck", web::get().to(healthcheck))
            .route("/activities", web::get().to(activities))
            .route("/activities/{activity}/signup", web::post().to(signup))
            .route(
                "/activities/{activity}/unregister",
                web::delete().to(unregister),
            )
            .route("/static/index.html", web::get().to(index_page))
            .route("/static/styles.css", web::get().to(stylesheet))
            .route("/static/app.js", web::get().to(app_script))
            .app_data(registry.clone())
    })
    .listen(listener)?
    .run())
}
