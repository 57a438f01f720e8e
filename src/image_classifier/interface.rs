use crate::image_classifier::preprocess::PreprocessedTensor;

/// Model Provider state. Anything other than Loaded means inference is
/// unavailable and the frame cycle yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    Loading,
    Loaded,
    Error,
}

/// One per-class score per known class, ordered by class index.
pub type ProbabilityVector = Vec<f32>;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub label_index: usize,
    pub confidence: f32,
}

pub trait ImageClassifier: Send + Sync {
    fn state(&self) -> ModelState;
    /// One synchronous forward pass. The tensor is consumed; it is used
    /// for exactly one inference. No retries on failure.
    fn classify(
        &self,
        tensor: PreprocessedTensor,
    ) -> Result<ProbabilityVector, Box<dyn std::error::Error + Send + Sync>>;
}

/// Argmax selection. Strict `>` comparison, so ties resolve to the
/// lowest index. Empty vectors produce no result.
pub fn select_result(probabilities: &[f32]) -> Option<ClassificationResult> {
    let mut best_index = 0;
    let mut best_score = *probabilities.first()?;
    for (index, &score) in probabilities.iter().enumerate().skip(1) {
        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }
    Some(ClassificationResult {
        label_index: best_index,
        confidence: best_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_result_picks_maximum() {
        let result = select_result(&[0.1, 0.9, 0.05]).unwrap();
        assert_eq!(result.label_index, 1);
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_select_result_tie_resolves_to_lowest_index() {
        let result = select_result(&[0.5, 0.5, 0.2]).unwrap();
        assert_eq!(result.label_index, 0);
    }

    #[test]
    fn test_select_result_empty_vector() {
        assert!(select_result(&[]).is_none());
    }

    #[test]
    fn test_select_result_single_class() {
        let result = select_result(&[0.3]).unwrap();
        assert_eq!(result.label_index, 0);
        assert_eq!(result.confidence, 0.3);
    }
}
