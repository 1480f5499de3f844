use std::collections::BTreeMap;

/// Answers collected by the quiz, keyed by question index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswers {
    answers: BTreeMap<usize, String>,
}

impl QuizAnswers {
    pub fn new() -> Self {
        Self { answers: BTreeMap::new() }
    }

    pub fn record(&mut self, question: usize, answer: impl Into<String>) {
        self.answers.insert(question, answer.into());
    }

    pub fn get(&self, question: usize) -> Option<&str> {
        self.answers.get(&question).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

impl<S: Into<String>> FromIterator<(usize, S)> for QuizAnswers {
    fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
        let mut answers = Self::new();
        for (question, answer) in iter {
            answers.record(question, answer);
        }
        answers
    }
}

/// The two subjects suggested once the quiz is done, best match first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation(pub [&'static str; 2]);

impl Recommendation {
    pub fn subjects(&self) -> &[&'static str; 2] {
        &self.0
    }
}

pub trait Recommender {
    fn recommend(&self, answers: &QuizAnswers) -> Recommendation;
}

/// Looks only at the first answer. The study-style and priority answers are collected
/// but not weighed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionTable;

impl Recommender for DecisionTable {
    fn recommend(&self, answers: &QuizAnswers) -> Recommendation {
        match answers.get(0) {
            Some("Stay in science") => Recommendation(["Medical Science", "Zoology"]),
            Some("Explore society & behavior") => Recommendation(["Anthropology", "Psychology"]),
            _ => Recommendation(["Philosophy", "Psychology"]),
        }
    }
}

pub fn resolve(answers: &QuizAnswers) -> Recommendation {
    DecisionTable.recommend(answers)
}
