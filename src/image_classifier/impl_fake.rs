use crate::image_classifier::interface::{ImageClassifier, ModelState, ProbabilityVector};
use crate::image_classifier::preprocess::PreprocessedTensor;
use crate::library::logger::interface::Logger;
use crate::species::MUSHROOM_LABELS;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

/// Fake classifier for demo runs and tests. By default it is Loaded and
/// returns a random probability vector over the known labels; tests can
/// pin the vector, the model state, or force classification failures.
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    state: ModelState,
    scripted: Option<ProbabilityVector>,
    failing: bool,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
            state: ModelState::Loaded,
            scripted: None,
            failing: false,
        }
    }

    pub fn with_probabilities(mut self, probabilities: ProbabilityVector) -> Self {
        self.scripted = Some(probabilities);
        self
    }

    pub fn with_state(mut self, state: ModelState) -> Self {
        self.state = state;
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.failing = true;
        self
    }

    fn random_probabilities() -> Result<ProbabilityVector, Box<dyn std::error::Error + Send + Sync>>
    {
        let mut rng = rand::rng();
        let index_dist = Uniform::new(0, MUSHROOM_LABELS.len())?;
        let confidence_dist = Uniform::new(0.3f32, 1.0)?;

        let hot_index = index_dist.sample(&mut rng);
        let hot_score = confidence_dist.sample(&mut rng);
        let rest = (1.0 - hot_score) / (MUSHROOM_LABELS.len() - 1) as f32;

        Ok(MUSHROOM_LABELS
            .iter()
            .enumerate()
            .map(|(index, _)| if index == hot_index { hot_score } else { rest })
            .collect())
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn state(&self) -> ModelState {
        self.state
    }

    fn classify(
        &self,
        tensor: PreprocessedTensor,
    ) -> Result<ProbabilityVector, Box<dyn std::error::Error + Send + Sync>> {
        if self.failing {
            return Err("fake classifier failure".into());
        }
        if !tensor.len_is_valid() {
            return Err("malformed tensor".into());
        }
        let _ = self.logger.info("Classifying frame...");
        match &self.scripted {
            Some(probabilities) => Ok(probabilities.clone()),
            None => Self::random_probabilities(),
        }
    }
}
