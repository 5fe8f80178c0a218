use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use log::{error, info};

use crate::inference::Model;
use crate::models::{ErrorResponse, PredictionInput, PredictionResponse};

const INTERNAL_ERROR_DETAIL: &str = "Erreur interne du serveur lors de la prédiction.";

#[post("/predict")]
pub async fn predict(
    model: web::Data<dyn Model>,
    input: web::Json<PredictionInput>,
) -> impl Responder {
    let features = input.to_array();

    match model.predict(&features) {
        Ok(prediction) => {
            info!("🔍 Prédiction effectuée : {}", prediction);
            HttpResponse::Ok().json(PredictionResponse { prediction })
        }
        Err(e) => {
            // Le détail reste côté serveur, le client ne voit qu'un message générique.
            error!("❌ Erreur lors de la prédiction : {:?}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                detail: INTERNAL_ERROR_DETAIL.to_owned(),
            })
        }
    }
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Transforme les erreurs de désérialisation JSON (champ manquant, type
/// invalide, corps malformé) en 422 structuré, avant toute inférence.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let response = HttpResponse::UnprocessableEntity().json(ErrorResponse { detail });
    InternalError::from_response(err, response).into()
}

/// Configuration JSON partagée entre le serveur et les tests.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(json_error_handler)
}
