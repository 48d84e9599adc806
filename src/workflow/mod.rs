pub mod classification_cascade;
pub mod debounce;
pub mod question_form;

pub use classification_cascade::{ClassificationCascade, SelectOption};
pub use debounce::Debouncer;
pub use question_form::{QuestionFormController, QuestionFormState};
