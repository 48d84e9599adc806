pub mod auth;
pub mod classification;
pub mod envelope;
pub mod feedback;
pub mod question;
pub mod stats;
pub mod user;

pub use auth::{AdminUser, LoginRequest, LoginResponse};
pub use classification::{Chapter, ClassificationNames, ClassificationSelection, Subject, Unit};
pub use envelope::{DataEnvelope, ErrorBody, Paged, Pagination};
pub use feedback::{Feedback, FeedbackQuestion, FeedbackStatus, FeedbackUser};
pub use question::{Bilingual, Difficulty, Question, QuestionOption, QuestionPayload, QuestionQuery, QuestionStatus};
pub use stats::DashboardStats;
pub use user::{User, UserPayload, UserQuery, UserStats, UserTab, UserType};
