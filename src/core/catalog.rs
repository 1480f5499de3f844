use std::collections::HashSet;

use super::{
    errors::GuideError,
    models::{
        ColorTag,
        QuizQuestion,
        Strength,
        SubjectRecord,
        SyllabusSize,
    },
};

pub const MORE_SUBJECTS: [&str; 8] = [
    "Sociology",
    "Public Administration",
    "Literature",
    "Statistics",
    "Law",
    "Geography",
    "Botany",
    "Management",
];

pub const STRENGTHS: [Strength; 3] = [
    Strength {
        icon: "🩺",
        title: "MBBS Knowledge",
        description: "Strong foundation in medical sciences",
    },
    Strength {
        icon: "🧠",
        title: "Analytical Skills",
        description: "Problem-solving mindset from medical training",
    },
    Strength {
        icon: "📚",
        title: "Study Discipline",
        description: "Proven ability to handle vast syllabi",
    },
];

pub static QUIZ_QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion {
        prompt: "What's your primary interest?",
        options: [
            "Stay in science",
            "Explore society & behavior",
            "Analytical subjects",
            "Creative subjects",
        ],
    },
    QuizQuestion {
        prompt: "How do you prefer to study?",
        options: ["Diagrams & visuals", "Text & theory", "Case studies", "Practical examples"],
    },
    QuizQuestion {
        prompt: "What's your scoring priority?",
        options: [
            "Maximum overlap with MBBS",
            "Highest scoring potential",
            "Manageable syllabus",
            "Personal interest",
        ],
    },
];

/// The fixed, ordered set of primary subjects. Records are never mutated once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    subjects: Vec<SubjectRecord>,
}

impl Catalog {
    pub fn new(subjects: Vec<SubjectRecord>) -> Result<Self, GuideError> {
        let mut seen = HashSet::new();
        for subject in &subjects {
            if !seen.insert(subject.name.as_str()) {
                return Err(GuideError::DuplicateSubject(subject.name.clone()));
            }
            for value in [subject.overlap_score, subject.scoring_potential] {
                if value > 100 {
                    return Err(GuideError::ScoreOutOfRange {
                        subject: subject.name.clone(),
                        value,
                    });
                }
            }
        }

        Ok(Self { subjects })
    }

    pub fn builtin() -> Self {
        Self {
            subjects: vec![
                SubjectRecord::new(
                    "Medical Science",
                    95,
                    85,
                    SyllabusSize::Medium,
                    "Perfect for MBBS background",
                    "Vast syllabus, needs current updates",
                    ColorTag::Blue,
                ),
                SubjectRecord::new(
                    "Anthropology",
                    40,
                    90,
                    SyllabusSize::Medium,
                    "Good for analytical minds",
                    "Abstract concepts, less overlap",
                    ColorTag::Purple,
                ),
                SubjectRecord::new(
                    "Psychology",
                    60,
                    85,
                    SyllabusSize::Small,
                    "Human behavior understanding",
                    "Subjective answers, case studies",
                    ColorTag::Pink,
                ),
                SubjectRecord::new(
                    "Philosophy",
                    20,
                    80,
                    SyllabusSize::Large,
                    "Logical thinking development",
                    "Abstract thinking, lengthy answers",
                    ColorTag::Indigo,
                ),
                SubjectRecord::new(
                    "Zoology",
                    75,
                    82,
                    SyllabusSize::Large,
                    "Strong biology foundation",
                    "Diagram intensive, detailed study",
                    ColorTag::Green,
                ),
            ],
        }
    }

    pub fn subjects(&self) -> &[SubjectRecord] {
        &self.subjects
    }

    pub fn get(&self, name: &str) -> Option<&SubjectRecord> {
        self.subjects.iter().find(|subject| subject.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        let validated = Catalog::new(builtin.subjects().to_vec()).unwrap();
        assert_eq!(validated.len(), 5);

        let names: Vec<&str> = builtin.subjects().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Medical Science", "Anthropology", "Psychology", "Philosophy", "Zoology"]
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut subjects = Catalog::builtin().subjects().to_vec();
        subjects.push(subjects[2].clone());

        match Catalog::new(subjects) {
            Err(GuideError::DuplicateSubject(name)) => assert_eq!(name, "Psychology"),
            other => panic!("Expected DuplicateSubject, got {:?}", other),
        }
    }

    #[test]
    fn test_score_out_of_range_rejected() {
        let mut subjects = Catalog::builtin().subjects().to_vec();
        subjects[0].scoring_potential = 101;

        assert!(matches!(
            Catalog::new(subjects),
            Err(GuideError::ScoreOutOfRange { value: 101, .. })
        ));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("Zoology").map(|s| s.overlap_score), Some(75));
        assert!(!catalog.contains("Botany")); // Only listed under more options
    }

    #[test]
    fn test_quiz_questions_cover_resolver_answers() {
        assert!(QUIZ_QUESTIONS[0].has_option("Stay in science"));
        assert!(QUIZ_QUESTIONS[0].has_option("Explore society & behavior"));
    }
}
