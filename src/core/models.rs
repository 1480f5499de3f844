use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyllabusSize {
    Small,
    Medium,
    Large,
}

impl SyllabusSize {
    pub fn label(&self) -> &'static str {
        match self {
            SyllabusSize::Small => "Small",
            SyllabusSize::Medium => "Medium",
            SyllabusSize::Large => "Large",
        }
    }
}

impl fmt::Display for SyllabusSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accent used when drawing a subject's card. Carries no meaning beyond display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Blue,
    Purple,
    Pink,
    Indigo,
    Green,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRecord {
    pub name: String,
    pub overlap_score: u8,     // Relevance to prior medical training, 0-100
    pub scoring_potential: u8, // 0-100
    pub syllabus_size: SyllabusSize,
    pub suitability_note: String,
    pub challenges_note: String,
    pub color_tag: ColorTag,
}

impl SubjectRecord {
    pub fn new(
        name: &str,
        overlap_score: u8,
        scoring_potential: u8,
        syllabus_size: SyllabusSize,
        suitability_note: &str,
        challenges_note: &str,
        color_tag: ColorTag,
    ) -> Self {
        Self {
            name: name.to_string(),
            overlap_score,
            scoring_potential,
            syllabus_size,
            suitability_note: suitability_note.to_string(),
            challenges_note: challenges_note.to_string(),
            color_tag,
        }
    }

    /// Filled stars out of five, one per full 20 points of scoring potential.
    pub fn star_rating(&self) -> u8 {
        (self.scoring_potential / 20).min(5)
    }
}

/// One of the strengths listed in the background section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strength {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
}

impl QuizQuestion {
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| *candidate == option)
    }
}
