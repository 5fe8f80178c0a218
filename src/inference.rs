use std::path::{Path, PathBuf};

use tract_onnx::prelude::*;

use crate::models::FEATURE_COUNT;

/// Opération d'inférence exposée par le modèle chargé.
///
/// Le handler HTTP ne dépend que de ce trait : le modèle réel est injecté au
/// démarrage, et les tests peuvent y substituer un stub.
pub trait Model: Send + Sync {
    fn predict(&self, features: &[f32; FEATURE_COUNT]) -> anyhow::Result<f32>;
}

/// Erreurs fatales de chargement du modèle au démarrage.
#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("modèle introuvable : {0}")]
    NotFound(PathBuf),
    #[error("échec du chargement du modèle : {0}")]
    Invalid(anyhow::Error),
}

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Modèle de régression ONNX chargé une fois au démarrage, puis en lecture
/// seule pour toute la durée du processus.
#[derive(Debug)]
pub struct OnnxModel {
    plan: OnnxPlan,
}

impl OnnxModel {
    pub fn load<P: AsRef<Path>>(model_path: P) -> Result<Self, ModelLoadError> {
        let model_path = model_path.as_ref();
        if !model_path.exists() {
            return Err(ModelLoadError::NotFound(model_path.to_owned()));
        }

        let plan = tract_onnx::onnx()
            .model_for_path(model_path)
            .and_then(|m| {
                m.with_input_fact(
                    0,
                    InferenceFact::dt_shape(f32::datum_type(), tvec!(1, FEATURE_COUNT)),
                )
            })
            .and_then(|m| m.into_optimized())
            .and_then(|m| m.into_runnable())
            .map_err(ModelLoadError::Invalid)?;

        Ok(Self { plan })
    }
}

impl Model for OnnxModel {
    fn predict(&self, features: &[f32; FEATURE_COUNT]) -> anyhow::Result<f32> {
        let input = Tensor::from_shape(&[1, FEATURE_COUNT], features)?;
        let outputs = self.plan.run(tvec!(input.into()))?;

        let prediction = *outputs[0]
            .to_array_view::<f32>()?
            .iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("aucune sortie du modèle"))?;

        Ok(prediction)
    }
}
