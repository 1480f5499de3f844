use log::info;

use super::{
    catalog::QUIZ_QUESTIONS,
    errors::GuideError,
    models::QuizQuestion,
    recommend::{
        DecisionTable,
        QuizAnswers,
        Recommendation,
        Recommender,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    AwaitingAnswer(usize),
    Completed(Recommendation),
}

/// Walks through the questions in order. There is no way back to a previous question,
/// only a full restart.
pub struct Quiz<R: Recommender = DecisionTable> {
    questions: &'static [QuizQuestion],
    answers: QuizAnswers,
    step: QuizStep,
    recommender: R,
}

impl Quiz<DecisionTable> {
    pub fn new() -> Self {
        Self::with_recommender(&QUIZ_QUESTIONS, DecisionTable)
    }
}

impl Default for Quiz<DecisionTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Recommender> Quiz<R> {
    /// With no questions there is nothing to answer, so the quiz starts completed.
    pub fn with_recommender(questions: &'static [QuizQuestion], recommender: R) -> Self {
        let mut quiz = Self {
            questions,
            answers: QuizAnswers::new(),
            step: QuizStep::AwaitingAnswer(0),
            recommender,
        };
        quiz.restart();
        quiz
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        match self.step {
            QuizStep::AwaitingAnswer(index) => self.questions.get(index),
            QuizStep::Completed(_) => None,
        }
    }

    pub fn recommendation(&self) -> Option<Recommendation> {
        match self.step {
            QuizStep::Completed(recommendation) => Some(recommendation),
            QuizStep::AwaitingAnswer(_) => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.step, QuizStep::Completed(_))
    }

    pub fn recommender(&self) -> &R {
        &self.recommender
    }

    /// Records `answer` for the current question and advances. Returns the recommendation
    /// when this was the last question.
    pub fn submit(&mut self, answer: &str) -> Result<Option<Recommendation>, GuideError> {
        let index = match self.step {
            QuizStep::AwaitingAnswer(index) => index,
            QuizStep::Completed(_) => return Err(GuideError::QuizCompleted),
        };

        let question = self
            .questions
            .get(index)
            .ok_or_else(|| GuideError::Custom(format!("No quiz question at index {index}")))?;
        if !question.has_option(answer) {
            return Err(GuideError::UnknownOption { question: index, option: answer.to_string() });
        }

        self.answers.record(index, answer);

        if index + 1 < self.questions.len() {
            self.step = QuizStep::AwaitingAnswer(index + 1);
            return Ok(None);
        }

        let recommendation = self.recommender.recommend(&self.answers);
        info!("[Quiz] Completed, recommending {:?}", recommendation.subjects());
        self.step = QuizStep::Completed(recommendation);
        Ok(Some(recommendation))
    }

    pub fn restart(&mut self) {
        self.answers.clear();
        self.step = if self.questions.is_empty() {
            QuizStep::Completed(self.recommender.recommend(&self.answers))
        } else {
            QuizStep::AwaitingAnswer(0)
        };
    }
}
