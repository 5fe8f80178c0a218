use serde::{Deserialize, Serialize};

/// Nombre de features attendues par le modèle.
pub const FEATURE_COUNT: usize = 30;

/// Entrée de prédiction : les 30 features dans l'ordre d'entraînement du modèle.
///
/// L'ordre des champs est contractuel (feature1 en premier, feature30 en
/// dernier) : le modèle a été entraîné sur cet ordre de colonnes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PredictionInput {
    pub feature1: f32,
    pub feature2: f32,
    pub feature3: f32,
    pub feature4: f32,
    pub feature5: f32,
    pub feature6: f32,
    pub feature7: f32,
    pub feature8: f32,
    pub feature9: f32,
    pub feature10: f32,
    pub feature11: f32,
    pub feature12: f32,
    pub feature13: f32,
    pub feature14: f32,
    pub feature15: f32,
    pub feature16: f32,
    pub feature17: f32,
    pub feature18: f32,
    pub feature19: f32,
    pub feature20: f32,
    pub feature21: f32,
    pub feature22: f32,
    pub feature23: f32,
    pub feature24: f32,
    pub feature25: f32,
    pub feature26: f32,
    pub feature27: f32,
    pub feature28: f32,
    pub feature29: f32,
    pub feature30: f32,
}

impl PredictionInput {
    /// Assemble le vecteur de features, dans l'ordre des colonnes d'entraînement.
    pub fn to_array(&self) -> [f32; FEATURE_COUNT] {
        [
            self.feature1,
            self.feature2,
            self.feature3,
            self.feature4,
            self.feature5,
            self.feature6,
            self.feature7,
            self.feature8,
            self.feature9,
            self.feature10,
            self.feature11,
            self.feature12,
            self.feature13,
            self.feature14,
            self.feature15,
            self.feature16,
            self.feature17,
            self.feature18,
            self.feature19,
            self.feature20,
            self.feature21,
            self.feature22,
            self.feature23,
            self.feature24,
            self.feature25,
            self.feature26,
            self.feature27,
            self.feature28,
            self.feature29,
            self.feature30,
        ]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PredictionResponse {
    pub prediction: f32,
}

/// Corps des réponses d'erreur (422 et 500).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub detail: String,
}
