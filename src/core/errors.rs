use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate subject in catalog: {0}")]
    DuplicateSubject(String),

    #[error("Score for {subject} is out of range (0-100): {value}")]
    ScoreOutOfRange { subject: String, value: u8 },

    #[error("The quiz is already completed")]
    QuizCompleted,

    #[error("'{option}' is not an option for question {question}")]
    UnknownOption { question: usize, option: String },

    #[error("GuideError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for GuideError {
    fn from(error: std::io::Error) -> Self {
        GuideError::Io(Box::new(error))
    }
}
