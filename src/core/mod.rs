pub mod bookmarks;
pub mod catalog;
pub mod errors;
pub mod models;
pub mod quiz;
pub mod recommend;
pub mod sort;

pub use bookmarks::BookmarkSet;
pub use catalog::Catalog;
pub use errors::GuideError;
pub use models::{ ColorTag, QuizQuestion, Strength, SubjectRecord, SyllabusSize };
pub use quiz::{ Quiz, QuizStep };
pub use recommend::{ DecisionTable, QuizAnswers, Recommendation, Recommender };
pub use sort::{ SortDirection, SortKey, SortState };
