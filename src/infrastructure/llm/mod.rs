mod assessor_factory;
mod openai_assessor;
mod openai_topic_model;

pub use assessor_factory::{AssessorFactory, AssessorFactoryError};
pub use openai_assessor::OpenAiAssessor;
pub use openai_topic_model::OpenAiTopicModel;
