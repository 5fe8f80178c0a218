use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::{error, info};

use prediction_api::config::{Config, CorsPolicy};
use prediction_api::inference::{Model, ModelLoadError, OnnxModel};
use prediction_api::routes;

fn build_cors(policy: &CorsPolicy) -> Cors {
    match policy {
        CorsPolicy::AllowAny => Cors::permissive(),
        CorsPolicy::AllowList(origins) => {
            let cors = origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));
            cors.allow_any_method()
                .allow_any_header()
                .supports_credentials()
                .max_age(3600)
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    info!("🚀 Démarrage du service de prédiction");

    let config = Config::from_env();

    // Fail-fast : aucun trafic n'est accepté sans modèle chargé.
    let model = match OnnxModel::load(&config.model_path) {
        Ok(model) => {
            info!("✅ Modèle chargé avec succès depuis {}", config.model_path);
            model
        }
        Err(e @ ModelLoadError::NotFound(_)) => {
            error!("❌ {}. Exécutez l'entraînement pour le générer.", e);
            std::process::exit(1);
        }
        Err(e @ ModelLoadError::Invalid(_)) => {
            error!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let model: web::Data<dyn Model> = web::Data::from(Arc::new(model) as Arc<dyn Model>);

    let bind_address = config.bind_address();
    info!("🌐 Serveur démarré sur http://{}", bind_address);
    info!("👷 Workers: {}", config.workers);
    info!("🔧 Endpoints:");
    info!("   GET  /health   - Vérification santé");
    info!("   POST /predict  - Prédiction (30 features)");

    let cors_policy = config.cors.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(build_cors(&cors_policy))
            .app_data(model.clone())
            .app_data(routes::json_config())
            .service(routes::predict)
            .service(routes::health)
    })
    .workers(config.workers)
    .bind(&bind_address)?
    .run()
    .await
}
