//! Statistical MBTI predictor
//!
//! The model is trained offline and exported as a JSON artifact holding a
//! TF-IDF vocabulary plus a multinomial linear classifier. It is loaded once
//! at startup and passed by reference to the analyzer.

use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::MlPrediction;
use crate::{ChatlensError, Result};

lazy_static! {
    /// Tokens of two or more word characters
    static ref RE_TOKEN: Regex = Regex::new(r"\w\w+").unwrap();
}

/// Narrow prediction interface for type classifiers
pub trait MbtiPredictor: Send + Sync {
    fn predict(&self, messages: &[&str]) -> MlPrediction;
}

/// TF-IDF features + linear classifier loaded from a JSON artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearMbtiModel {
    /// Token or "token token" bigram → feature column
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    /// 1 = unigrams, 2 = unigrams + bigrams
    #[serde(default = "default_ngram_max")]
    pub ngram_max: usize,
    pub classes: Vec<String>,
    /// One row per class, one column per feature
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

fn default_ngram_max() -> usize {
    2
}

impl LinearMbtiModel {
    /// Load and validate an artifact. A missing file is `MissingModel`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ChatlensError::MissingModel {
                path: path.display().to_string(),
            });
        }

        let json = std::fs::read_to_string(path)?;
        let model: Self = serde_json::from_str(&json)
            .map_err(|e| ChatlensError::InvalidModel(format!("{}: {}", path.display(), e)))?;
        model.validate()?;

        info!(
            path = %path.display(),
            classes = model.classes.len(),
            features = model.idf.len(),
            "loaded model artifact"
        );
        Ok(model)
    }

    /// Check that all shapes line up
    pub fn validate(&self) -> Result<()> {
        let features = self.idf.len();

        if self.classes.is_empty() {
            return Err(ChatlensError::InvalidModel("no classes".to_string()));
        }
        if self.coefficients.len() != self.classes.len() || self.intercepts.len() != self.classes.len() {
            return Err(ChatlensError::InvalidModel(format!(
                "{} classes but {} coefficient rows and {} intercepts",
                self.classes.len(),
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }
        if let Some(row) = self.coefficients.iter().find(|row| row.len() != features) {
            return Err(ChatlensError::InvalidModel(format!(
                "coefficient row has {} columns, expected {}",
                row.len(),
                features
            )));
        }
        if let Some((token, idx)) = self.vocabulary.iter().find(|(_, idx)| **idx >= features) {
            return Err(ChatlensError::InvalidModel(format!(
                "vocabulary entry '{}' points at column {} of {}",
                token, idx, features
            )));
        }
        if !(1..=2).contains(&self.ngram_max) {
            return Err(ChatlensError::InvalidModel(format!(
                "unsupported ngram_max {}",
                self.ngram_max
            )));
        }
        Ok(())
    }

    /// L2-normalised tf-idf vector of a document
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.idf.len()];

        for term in terms(document, self.ngram_max) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                features[idx] += 1.0;
            }
        }

        for (value, idf) in features.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = features.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }
        features
    }

    /// Softmax class probabilities, same order as `classes`
    pub fn probabilities(&self, document: &str) -> Vec<f64> {
        let x = self.transform(document);
        let logits: Vec<f64> = self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, b)| b + row.iter().zip(&x).map(|(w, v)| w * v).sum::<f64>())
            .collect();

        let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = logits.iter().map(|z| (z - max).exp()).collect();
        let sum: f64 = exps.iter().sum();
        exps.iter().map(|e| e / sum).collect()
    }
}

impl MbtiPredictor for LinearMbtiModel {
    fn predict(&self, messages: &[&str]) -> MlPrediction {
        let document = messages.join(" ");
        let probabilities = self.probabilities(&document);

        // First maximum wins
        let (best, confidence) = probabilities
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |acc, (i, p)| if *p > acc.1 { (i, *p) } else { acc });

        MlPrediction::new(self.classes[best].clone(), confidence)
    }
}

/// Lowercased unigrams, plus adjacent bigrams when `ngram_max` is 2
fn terms(document: &str, ngram_max: usize) -> Vec<String> {
    let lower = document.to_lowercase();
    let tokens: Vec<&str> = RE_TOKEN.find_iter(&lower).map(|m| m.as_str()).collect();

    let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    if ngram_max >= 2 {
        terms.extend(tokens.windows(2).map(|w| format!("{} {}", w[0], w[1])));
    }
    terms
}

// =============================================================================
// TESTS
// =============================================================================
