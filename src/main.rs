pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::entry;
pub use modules::topic;

use crate::api::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};
use crate::entry::adapter::outgoing::{EntryQueryPostgres, EntryRepositoryPostgres};
use crate::entry::application::entry_use_cases::EntryUseCases;
use crate::entry::application::services::{
    CreateEntryService, DeleteEntryService, EditEntryService, GetOwnedEntryService,
};
use crate::shared::api::{custom_json_config, custom_path_config};
use crate::shared::config::{load_dotenv, AppConfig};
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::services::{
    CreateTopicService, DeleteTopicService, EditTopicService, GetOwnedTopicService,
    ListOwnedTopicsService, ListTopicsService, ViewTopicService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub topic: TopicUseCases,
    pub entry: EntryUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env = load_dotenv();
    info!(%env, "Starting application...");

    let config = AppConfig::from_env().context("Invalid application configuration")?;
    let jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.auto_migrate {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);

    // Auth
    let jwt_service = JwtTokenService::new(jwt_config);
    let password_hasher = Argon2Hasher::from_config(&config.password_hash)
        .context("Invalid Argon2 parameters")?;

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let register_user_use_case = RegisterUserUseCase::new(
        user_repo,
        Arc::new(password_hasher.clone()),
        Arc::new(jwt_service.clone()),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query,
        Arc::new(password_hasher),
        Arc::new(jwt_service.clone()),
    );

    // Topics and entries
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
    let entry_query = EntryQueryPostgres::new(Arc::clone(&db_arc));
    let entry_repo = EntryRepositoryPostgres::new(Arc::clone(&db_arc));

    let topic_use_cases = TopicUseCases {
        list: Arc::new(ListTopicsService::new(topic_query.clone())),
        list_owned: Arc::new(ListOwnedTopicsService::new(topic_query.clone())),
        view: Arc::new(ViewTopicService::new(topic_query.clone(), entry_query.clone())),
        create: Arc::new(CreateTopicService::new(topic_repo.clone())),
        get_owned: Arc::new(GetOwnedTopicService::new(topic_query.clone())),
        edit: Arc::new(EditTopicService::new(topic_query.clone(), topic_repo.clone())),
        delete: Arc::new(DeleteTopicService::new(topic_query.clone(), topic_repo)),
    };

    let entry_use_cases = EntryUseCases {
        create: Arc::new(CreateEntryService::new(topic_query, entry_repo.clone())),
        get_owned: Arc::new(GetOwnedEntryService::new(entry_query.clone())),
        edit: Arc::new(EditEntryService::new(entry_query.clone(), entry_repo.clone())),
        delete: Arc::new(DeleteEntryService::new(entry_query, entry_repo)),
    };

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        topic: topic_use_cases,
        entry: entry_use_cases,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    let server_url = config.server_url();
    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("Server terminated with an error")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::index_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::list_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::list_owned_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::view_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::new_topic_form_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::new_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::edit_topic_form_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::edit_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_resource());
    // Entries
    cfg.service(crate::entry::adapter::incoming::web::routes::new_entry_form_handler);
    cfg.service(crate::entry::adapter::incoming::web::routes::new_entry_handler);
    cfg.service(crate::entry::adapter::incoming::web::routes::edit_entry_form_handler);
    cfg.service(crate::entry::adapter::incoming::web::routes::edit_entry_handler);
    cfg.service(crate::entry::adapter::incoming::web::routes::delete_entry_resource());
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
