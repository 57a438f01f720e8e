use crate::image_classifier::interface::{ImageClassifier, ModelState, ProbabilityVector};
use crate::image_classifier::preprocess::PreprocessedTensor;
use tract_onnx::prelude::*;

/// ONNX-backed classifier. Holds the loaded plan; one blocking forward
/// pass per call.
pub struct ImageClassifierTract {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    input_size: u32,
}

impl ImageClassifierTract {
    pub fn load(
        model_path: &str,
        input_size: u32,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let model = tract_onnx::onnx()
            .model_for_path(model_path)?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { model, input_size })
    }

    fn to_input(&self, tensor: &PreprocessedTensor) -> Tensor {
        let size = tensor.size as usize;
        // HWC [0,1] floats to the NCHW layout classification models expect.
        let array = tract_ndarray::Array4::from_shape_fn((1, 3, size, size), |(_, c, y, x)| {
            tensor.pixels[(y * size + x) * 3 + c]
        });
        array.into_tensor()
    }
}

impl ImageClassifier for ImageClassifierTract {
    fn state(&self) -> ModelState {
        // The plan exists once loading succeeded; load errors surface
        // from `load` before a classifier value exists.
        ModelState::Loaded
    }

    fn classify(
        &self,
        tensor: PreprocessedTensor,
    ) -> Result<ProbabilityVector, Box<dyn std::error::Error + Send + Sync>> {
        if !tensor.len_is_valid() || tensor.size != self.input_size {
            return Err("malformed tensor".into());
        }

        let input = self.to_input(&tensor);
        let outputs = self.model.run(tvec!(input.into_tvalue()))?;
        let output = outputs[0].to_array_view::<f32>()?;

        Ok(output.iter().copied().collect())
    }
}
