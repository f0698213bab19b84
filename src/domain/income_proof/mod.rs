//! Income proof module - The branching document-guidance questionnaire.

mod documents;
mod step;
mod tree;

pub use documents::{recommended_documents, DocumentKind};
pub use step::{QuestionnaireState, StepId};
pub use tree::{DecisionTree, StepPrompt};
