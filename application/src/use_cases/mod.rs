pub mod daily_question;
pub mod evaluate_answer;
pub mod review_progress;
pub mod shared;
pub mod submit_answer;
