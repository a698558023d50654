use ndarray::Array1;
use rand::Rng;

use crate::activation::step;
use crate::error::PerceptronError;

/// A single-neuron binary linear classifier trained with the classical
/// perceptron learning rule
#[derive(Debug, Clone)]
pub struct Perceptron {
    pub size: usize,
    pub learning_rate: f32,
    pub weights: Array1<f32>,
    pub bias: f32,
}

impl Perceptron {
    /// Create a new perceptron with randomly initialized parameters
    ///
    /// # Arguments
    ///
    /// * `size` - Number of input features, must be greater than zero
    /// * `learning_rate` - Step size for parameter updates, must be positive
    /// * `rng` - Source of uniform draws in [0, 1) used for initialization
    pub fn new<R: Rng>(
        size: usize,
        learning_rate: f32,
        rng: &mut R,
    ) -> Result<Self, PerceptronError> {
        if size == 0 {
            return Err(PerceptronError::InvalidArgument(
                "size must be greater than zero".to_string(),
            ));
        }
        if learning_rate <= 0.0 {
            return Err(PerceptronError::InvalidArgument(
                "learning rate must be greater than zero".to_string(),
            ));
        }

        // Bias first, then one weight per feature, so a seeded rng
        // reproduces the same parameters.
        let bias = small_random(rng);
        let weights: Array1<f32> = (0..size).map(|_| small_random(rng)).collect();

        Ok(Perceptron {
            size,
            learning_rate,
            weights,
            bias,
        })
    }

    /// Classify an input vector as 0 or 1
    ///
    /// Computes `bias + weights · input` and applies the step
    /// activation; a raw sum of exactly zero classifies as `0.0`.
    pub fn predict(&self, input: &Array1<f32>) -> Result<f32, PerceptronError> {
        self.check_input(input)?;

        let raw = self.bias + self.weights.dot(input);
        Ok(step(raw))
    }

    /// Train on a single labeled example
    ///
    /// Applies one step of the perceptron learning rule, using the
    /// prediction computed before any parameter changes. Returns the
    /// absolute error: `0.0` when the example was already classified
    /// correctly, `1.0` otherwise. The update is applied even when the
    /// error is zero, where it is a numeric no-op.
    pub fn train(&mut self, input: &Array1<f32>, target: f32) -> Result<f32, PerceptronError> {
        let output = self.predict(input)?;
        let error = target - output;

        self.weights = &self.weights + self.learning_rate * error * input;
        self.bias += self.learning_rate * error;

        Ok(error.abs())
    }

    /// Train on a batch of labeled examples, one online update per example
    ///
    /// Examples are presented in order and each update is applied before
    /// the next example is evaluated. Returns the percentage (0-100) of
    /// examples classified correctly at the moment they were presented,
    /// a training-time proxy rather than a held-out evaluation metric.
    pub fn train_batch(
        &mut self,
        inputs: &[Array1<f32>],
        targets: &[f32],
    ) -> Result<f32, PerceptronError> {
        // Validate the whole batch up front so a bad row cannot leave
        // the parameters partially updated.
        if inputs.is_empty() {
            return Err(PerceptronError::InvalidArgument(
                "batch must contain at least one example".to_string(),
            ));
        }
        if inputs.len() != targets.len() {
            return Err(PerceptronError::InvalidArgument(format!(
                "{} inputs but {} targets",
                inputs.len(),
                targets.len()
            )));
        }
        for input in inputs {
            self.check_input(input)?;
        }

        let mut error_sum = 0.0;
        for (input, target) in inputs.iter().zip(targets) {
            error_sum += self.train(input, *target)?;
        }

        let count = inputs.len() as f32;
        Ok((count - error_sum) * 100.0 / count)
    }

    /// Train over the same batch for up to `epochs` passes
    ///
    /// Stops early once a pass reaches 100% accuracy: a fully correct
    /// online pass applied no effective update, so further passes
    /// cannot change the parameters. Returns the last pass's accuracy.
    pub fn fit(
        &mut self,
        inputs: &[Array1<f32>],
        targets: &[f32],
        epochs: usize,
    ) -> Result<f32, PerceptronError> {
        let mut accuracy = 0.0;
        for epoch in 0..epochs {
            accuracy = self.train_batch(inputs, targets)?;
            if epoch % 100 == 0 {
                println!("Epoch {}, Accuracy: {}", epoch, accuracy);
            }
            if accuracy == 100.0 {
                break;
            }
        }
        Ok(accuracy)
    }

    fn check_input(&self, input: &Array1<f32>) -> Result<(), PerceptronError> {
        if input.len() != self.size {
            return Err(PerceptronError::DimensionMismatch {
                expected: self.size,
                actual: input.len(),
            });
        }
        Ok(())
    }
}

/// Draw a small value in (-1, 1): one uniform draw in [0, 1) for the
/// magnitude and an independent second draw for the sign
fn small_random<R: Rng>(rng: &mut R) -> f32 {
    let magnitude = rng.random::<f32>();
    if rng.random::<f32>() >= 0.5 {
        magnitude
    } else {
        -magnitude
    }
}
