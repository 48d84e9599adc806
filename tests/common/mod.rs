//! 集成测试共用的内存后端
//!
//! 实现全部接口 trait，按调用记录请求，数据保存在内存里，
//! 列表查询会按搜索词 / 难度 / 分页真实过滤。

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use exam_admin::api::{AuthApi, ClassificationApi, FeedbackApi, HealthApi, QuestionApi, StatsApi, UserApi};
use exam_admin::error::{AppError, AppResult};
use exam_admin::models::{
    AdminUser, Bilingual, Chapter, DashboardStats, Feedback, FeedbackQuestion, FeedbackStatus, FeedbackUser,
    LoginRequest, LoginResponse, Paged, Pagination, Question, QuestionOption, QuestionPayload, QuestionQuery,
    QuestionStatus, Subject, Unit, User, UserPayload, UserQuery, UserStats, UserType,
};
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Default)]
pub struct MockBackend {
    pub calls: Mutex<Vec<String>>,
    pub questions: Mutex<Vec<Question>>,
    pub payloads: Mutex<Vec<QuestionPayload>>,
    pub subjects: Vec<Subject>,
    pub units: Vec<Unit>,
    pub feedback: Mutex<Vec<Feedback>>,
    pub users: Mutex<Vec<User>>,
    pub user_stats: Option<UserStats>,
    /// 这些路径一律返回 500
    pub failing: Mutex<HashSet<&'static str>>,
    next_id: Mutex<u32>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            subjects: vec![subject("S1", "Physics"), subject("S2", "Chemistry")],
            units: vec![
                unit("U1", "Mechanics", "S1", &[("C1", "Kinematics"), ("C2", "Dynamics")]),
                unit("U2", "Optics", "S1", &[("C3", "Reflection")]),
                unit("U3", "Organic", "S2", &[("C4", "Alkanes")]),
            ],
            ..Default::default()
        }
    }

    pub fn with_questions(self, questions: Vec<Question>) -> Self {
        *self.questions.lock().unwrap() = questions;
        self
    }

    pub fn with_feedback(self, feedback: Vec<Feedback>) -> Self {
        *self.feedback.lock().unwrap() = feedback;
        self
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock().unwrap() = users;
        self
    }

    pub fn fail(&self, path: &'static str) {
        self.failing.lock().unwrap().insert(path);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn last_payload(&self) -> Option<QuestionPayload> {
        self.payloads.lock().unwrap().last().cloned()
    }

    fn record(&self, call: String, path: &'static str) -> AppResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(path) {
            return Err(AppError::api_bad_response(path, 500, Some("Internal server error".to_string())));
        }
        Ok(())
    }

    fn fresh_id(&self) -> String {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        format!("new-{}", next)
    }
}

impl AuthApi for MockBackend {
    async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        self.record(format!("POST /admin/login {}", request.email), "/admin/login")?;
        if request.password != "secret" {
            return Err(AppError::api_bad_response("/admin/login", 401, Some("Invalid credentials".to_string())));
        }
        Ok(LoginResponse {
            token: "token-123".to_string(),
            admin: AdminUser {
                id: "A1".to_string(),
                name: "Root".to_string(),
                email: request.email.clone(),
            },
        })
    }
}

impl QuestionApi for MockBackend {
    async fn list_questions(&self, query: &QuestionQuery) -> AppResult<Paged<Question>> {
        self.record(
            format!("GET /questions page={} search={} difficulty={:?}", query.page, query.search, query.difficulty),
            "/questions",
        )?;
        let needle = query.search.trim().to_lowercase();
        let matching: Vec<Question> = self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| needle.is_empty() || q.question_text.contains_lowercase(&needle))
            .filter(|q| query.difficulty.map_or(true, |d| q.difficulty == d))
            .cloned()
            .collect();

        let limit = query.limit.max(1) as usize;
        let total = matching.len();
        let pages = total.div_ceil(limit) as u32;
        let data = matching
            .into_iter()
            .skip((query.page.max(1) as usize - 1) * limit)
            .take(limit)
            .collect();
        Ok(Paged {
            data,
            pagination: Pagination {
                total: total as u64,
                page: query.page,
                pages,
                limit: query.limit,
            },
        })
    }

    async fn get_question(&self, id: &str) -> AppResult<Question> {
        self.record(format!("GET /questions/{}", id), "/questions/:id")?;
        self.questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or_else(|| AppError::api_bad_response("/questions/:id", 404, Some("Question not found".to_string())))
    }

    async fn create_question(&self, payload: &QuestionPayload) -> AppResult<Question> {
        self.record("POST /questions".to_string(), "POST /questions")?;
        self.payloads.lock().unwrap().push(payload.clone());
        let question = apply_payload(Question { id: self.fresh_id(), ..Default::default() }, payload);
        self.questions.lock().unwrap().push(question.clone());
        Ok(question)
    }

    async fn update_question(&self, id: &str, payload: &QuestionPayload) -> AppResult<Question> {
        self.record(format!("PATCH /questions/{}", id), "PATCH /questions/:id")?;
        self.payloads.lock().unwrap().push(payload.clone());
        let mut questions = self.questions.lock().unwrap();
        let slot = questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| AppError::api_bad_response("/questions/:id", 404, None))?;
        *slot = apply_payload(slot.clone(), payload);
        Ok(slot.clone())
    }

    async fn delete_question(&self, id: &str) -> AppResult<()> {
        self.record(format!("DELETE /questions/{}", id), "DELETE /questions/:id")?;
        self.questions.lock().unwrap().retain(|q| q.id != id);
        Ok(())
    }

    async fn set_question_status(&self, id: &str, status: QuestionStatus) -> AppResult<Question> {
        self.record(format!("PATCH /questions/{}/status {:?}", id, status), "/questions/:id/status")?;
        let mut questions = self.questions.lock().unwrap();
        let slot = questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| AppError::api_bad_response("/questions/:id/status", 404, None))?;
        slot.status = status;
        Ok(slot.clone())
    }
}

impl ClassificationApi for MockBackend {
    async fn list_subjects(&self) -> AppResult<Vec<Subject>> {
        self.record("GET /questions/subjects/list".to_string(), "/questions/subjects/list")?;
        Ok(self.subjects.clone())
    }

    async fn list_units(&self, subject_id: &str) -> AppResult<Vec<Unit>> {
        self.record(format!("POST /questions/subjects/units {}", subject_id), "/questions/subjects/units")?;
        Ok(self
            .units
            .iter()
            .filter(|u| u.subject_id.as_deref() == Some(subject_id))
            .cloned()
            .collect())
    }
}

impl UserApi for MockBackend {
    async fn list_users(&self, query: &UserQuery) -> AppResult<Paged<User>> {
        self.record(
            format!("GET /admin/users page={} search={} tab={:?}", query.page, query.search, query.tab),
            "/admin/users",
        )?;
        let data: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| query.tab.user_type().map_or(true, |t| u.user_type == t))
            .cloned()
            .collect();
        Ok(Paged {
            pagination: Pagination {
                total: data.len() as u64,
                page: query.page,
                pages: 1,
                limit: query.limit,
            },
            data,
        })
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        self.record(format!("GET /admin/users/{}", id), "/admin/users/:id")?;
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| AppError::api_bad_response("/admin/users/:id", 404, Some("User not found".to_string())))
    }

    async fn get_user_stats(&self, id: &str) -> AppResult<UserStats> {
        self.record(format!("GET /admin/users/{}/stats", id), "/admin/users/:id/stats")?;
        Ok(self.user_stats.clone().unwrap_or_default())
    }

    async fn create_user(&self, payload: &UserPayload) -> AppResult<User> {
        self.record("POST /admin/users".to_string(), "POST /admin/users")?;
        let user = User {
            id: self.fresh_id(),
            name: payload.name.clone(),
            email: payload.email.clone(),
            mobile: payload.mobile.clone(),
            user_type: payload.user_type,
            created_at: None,
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: &str, payload: &UserPayload) -> AppResult<User> {
        self.record(format!("PUT /admin/users/{}", id), "PUT /admin/users/:id")?;
        let mut users = self.users.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::api_bad_response("/admin/users/:id", 404, None))?;
        slot.name = payload.name.clone();
        slot.email = payload.email.clone();
        slot.mobile = payload.mobile.clone();
        slot.user_type = payload.user_type;
        Ok(slot.clone())
    }
}

impl FeedbackApi for MockBackend {
    async fn list_feedback(&self) -> AppResult<Vec<Feedback>> {
        self.record("GET /feedback".to_string(), "/feedback")?;
        Ok(self.feedback.lock().unwrap().clone())
    }

    async fn update_feedback_status(&self, id: &str, status: FeedbackStatus) -> AppResult<Feedback> {
        self.record(format!("PATCH /feedback/{}/status {}", id, status), "/feedback/:id/status")?;
        let mut feedback = self.feedback.lock().unwrap();
        let slot = feedback
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| AppError::api_bad_response("/feedback/:id/status", 404, None))?;
        slot.status = status;
        Ok(slot.clone())
    }
}

impl StatsApi for MockBackend {
    async fn dashboard_stats(&self) -> AppResult<DashboardStats> {
        self.record("GET /admin/stats".to_string(), "/admin/stats")?;
        let questions = self.questions.lock().unwrap();
        let feedback = self.feedback.lock().unwrap();
        Ok(DashboardStats {
            total_questions: questions.len() as u64,
            active_questions: questions.iter().filter(|q| q.status == QuestionStatus::Active).count() as u64,
            total_feedback: feedback.len() as u64,
            pending_feedback: feedback.iter().filter(|f| f.status == FeedbackStatus::Pending).count() as u64,
            ..Default::default()
        })
    }
}

impl HealthApi for MockBackend {
    async fn ping(&self) -> AppResult<()> {
        self.record("GET /help".to_string(), "/help")
    }
}

fn apply_payload(mut question: Question, payload: &QuestionPayload) -> Question {
    question.question_text = payload.question_text.clone();
    question.options = payload.options.clone();
    question.correct_option_key = payload.correct_option_key.clone();
    question.explanation = payload.explanation.clone();
    question.difficulty = payload.difficulty;
    question.status = payload.status;
    question.order = payload.order;
    question.subject_id = Some(payload.subject_id.clone());
    question.unit_id = payload.unit_id.clone();
    question.chapter_id = payload.chapter_id.clone();
    question
}

pub fn subject(id: &str, name: &str) -> Subject {
    Subject {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn unit(id: &str, name: &str, subject_id: &str, chapters: &[(&str, &str)]) -> Unit {
    Unit {
        id: id.to_string(),
        name: name.to_string(),
        subject_id: Some(subject_id.to_string()),
        chapters: chapters
            .iter()
            .map(|(id, name)| Chapter {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect(),
    }
}

pub fn question(id: &str, en: &str) -> Question {
    Question {
        id: id.to_string(),
        question_text: Bilingual::new(en, ""),
        options: ["A", "B"]
            .iter()
            .map(|k| QuestionOption {
                key: k.to_string(),
                text: Bilingual::new(*k, ""),
            })
            .collect(),
        correct_option_key: "A".to_string(),
        subject_id: Some("S1".to_string()),
        ..Default::default()
    }
}

pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, d, 12, 0, 0).unwrap()
}

pub fn feedback(id: &str, user: &str, question_en: &str, comment: &str, status: FeedbackStatus, d: u32) -> Feedback {
    Feedback {
        id: id.to_string(),
        comment: comment.to_string(),
        user: Some(FeedbackUser {
            id: format!("u-{}", id),
            name: user.to_string(),
        }),
        question: Some(FeedbackQuestion {
            id: format!("q-{}", id),
            question_text: Bilingual::new(question_en, ""),
        }),
        status,
        created_at: Some(day(d)),
    }
}

pub fn user(id: &str, name: &str, user_type: UserType) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: Some(format!("{}@example.com", id)),
        mobile: None,
        user_type,
        created_at: None,
    }
}
