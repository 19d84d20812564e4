//! Request/response models for the NeuroVerse API.

pub mod auth;
pub mod feedback;
pub mod report;
pub mod test_session;
pub mod user;
pub mod wellness;

pub use auth::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, RefreshRequest,
    RegisterRequest, ResendOtpRequest, TokenPair, VerifyOtpRequest,
};
pub use feedback::{Feedback, FeedbackCategory, FeedbackCreate, FeedbackList, FeedbackSubmitted};
pub use report::{Report, ReportCreate, ReportList, ReportType};
pub use test_session::{
    SessionStatus, TestCategory, TestItem, TestItemCreate, TestSession, TestSessionCreate,
    TestSessionList,
};
pub use user::{ProfileUpdate, UserProfile};
pub use wellness::{
    Mood, SleepQuality, WellnessEntry, WellnessEntryCreate, WellnessEntryUpdate, WellnessHistory,
};
