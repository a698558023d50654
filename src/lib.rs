mod activation;
mod error;
mod perceptron;

pub use error::PerceptronError;
pub use perceptron::Perceptron;
