use std::env::var;

/// Politique CORS du déploiement : liste blanche d'origines, ou tout autoriser.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsPolicy {
    AllowAny,
    AllowList(Vec<String>),
}

impl CorsPolicy {
    /// Interprète la variable `ALLOWED_ORIGINS` : `*` pour le mode permissif,
    /// sinon une liste d'origines séparées par des virgules.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return CorsPolicy::AllowAny;
        }
        CorsPolicy::AllowList(
            raw.split(',')
                .map(|o| o.trim().to_owned())
                .filter(|o| !o.is_empty())
                .collect(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub model_path: String,
    pub cors: CorsPolicy,
}

impl Config {
    pub fn from_env() -> Self {
        let host = var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let port = var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let workers = var("WORKERS")
            .ok()
            .and_then(|w| w.parse().ok())
            .unwrap_or_else(num_cpus::get);
        let model_path =
            var("MODEL_PATH").unwrap_or_else(|_| "models/average_model.onnx".to_owned());
        let cors = CorsPolicy::parse(&var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_owned()));

        Self {
            host,
            port,
            workers,
            model_path,
            cors,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
