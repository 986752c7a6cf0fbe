//! Static exam catalog and its filters.
//!
//! Every listed exam draws from the same small, fixed question set.

use std::collections::BTreeSet;

use crate::model::{Difficulty, ExamId, ExamListing, Question, QuestionError, QuestionId};

/// Catalog filter. Empty fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search_term: String,
    pub institution: Option<String>,
    pub discipline: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl CatalogFilter {
    /// Selects `institution`, or clears it if it was already selected.
    pub fn toggle_institution(&mut self, institution: &str) {
        toggle(&mut self.institution, institution.to_string());
    }

    /// Selects `discipline`, or clears it if it was already selected.
    pub fn toggle_discipline(&mut self, discipline: &str) {
        toggle(&mut self.discipline, discipline.to_string());
    }

    /// Selects `difficulty`, or clears it if it was already selected.
    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) {
        toggle(&mut self.difficulty, difficulty);
    }

    #[must_use]
    pub fn matches(&self, listing: &ExamListing) -> bool {
        let term = self.search_term.trim().to_lowercase();
        if !term.is_empty() && !listing.title.to_lowercase().contains(&term) {
            return false;
        }
        if self
            .institution
            .as_ref()
            .is_some_and(|i| *i != listing.institution)
        {
            return false;
        }
        if self
            .discipline
            .as_ref()
            .is_some_and(|d| !listing.has_discipline(d))
        {
            return false;
        }
        self.difficulty.is_none_or(|d| d == listing.difficulty)
    }
}

fn toggle<T: PartialEq>(slot: &mut Option<T>, value: T) {
    if slot.as_ref() == Some(&value) {
        *slot = None;
    } else {
        *slot = Some(value);
    }
}

/// The listings on offer plus the question set they share.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<ExamListing>,
    questions: Vec<Question>,
}

impl Catalog {
    #[must_use]
    pub fn new(listings: Vec<ExamListing>, questions: Vec<Question>) -> Self {
        Self {
            listings,
            questions,
        }
    }

    /// The catalog shipped with the app.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if a built-in question fails validation.
    pub fn builtin() -> Result<Self, QuestionError> {
        let questions = builtin_questions()?;
        let question_count = u32::try_from(questions.len()).unwrap_or(u32::MAX);
        let listings = builtin_listings(question_count);
        Ok(Self::new(listings, questions))
    }

    #[must_use]
    pub fn listings(&self) -> &[ExamListing] {
        &self.listings
    }

    #[must_use]
    pub fn listing(&self, id: ExamId) -> Option<&ExamListing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Questions for a listed exam, or `None` if the exam is unknown.
    #[must_use]
    pub fn questions_for(&self, id: ExamId) -> Option<&[Question]> {
        self.listing(id).map(|_| self.questions.as_slice())
    }

    /// Listings matching `filter`, in catalog order.
    #[must_use]
    pub fn search(&self, filter: &CatalogFilter) -> Vec<ExamListing> {
        self.listings
            .iter()
            .filter(|l| filter.matches(l))
            .cloned()
            .collect()
    }
}

/// Sorted, de-duplicated institutions of `listings`.
#[must_use]
pub fn institutions(listings: &[ExamListing]) -> Vec<String> {
    listings
        .iter()
        .map(|l| l.institution.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted, de-duplicated disciplines of `listings`.
#[must_use]
pub fn disciplines(listings: &[ExamListing]) -> Vec<String> {
    listings
        .iter()
        .flat_map(|l| l.disciplines.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn builtin_questions() -> Result<Vec<Question>, QuestionError> {
    let raw: [(u64, &str, [&str; 5], &str); 5] = [
        (
            1,
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Which alternative completes the passage?",
            ["Alternative 1", "Alternative 2", "Alternative 3", "Alternative 4", "Alternative 5"],
            "Alternative 3",
        ),
        (
            2,
            "What is the capital of Brazil?",
            ["Buenos Aires", "Brasília", "Madrid", "Paris", "Lisbon"],
            "Brasília",
        ),
        (
            3,
            "What is 7 multiplied by 8?",
            ["49", "54", "56", "63", "72"],
            "56",
        ),
        (
            4,
            "Who wrote 'Don Quixote'?",
            [
                "William Shakespeare",
                "Miguel de Cervantes",
                "Johann Wolfgang von Goethe",
                "Leo Tolstoy",
                "Charles Dickens",
            ],
            "Miguel de Cervantes",
        ),
        (
            5,
            "Which chemical element has the symbol 'O'?",
            ["Gold", "Oxygen", "Osmium", "Oganesson", "Oxide"],
            "Oxygen",
        ),
    ];

    raw.into_iter()
        .map(|(id, prompt, choices, correct)| {
            Question::new(
                QuestionId::new(id),
                prompt,
                choices.iter().map(|c| (*c).to_string()).collect(),
                correct,
            )
        })
        .collect()
}

fn builtin_listings(question_count: u32) -> Vec<ExamListing> {
    let listing = |id: u64,
                   title: &str,
                   institution: &str,
                   disciplines: &[&str],
                   difficulty: Difficulty,
                   duration_minutes: u32| ExamListing {
        id: ExamId::new(id),
        title: title.to_string(),
        institution: institution.to_string(),
        disciplines: disciplines.iter().map(|d| (*d).to_string()).collect(),
        difficulty,
        duration_minutes,
        question_count,
    };

    vec![
        listing(1, "ENEM 2023 - Day 1", "INEP", &["Languages", "Humanities"], Difficulty::Medium, 30),
        listing(2, "ENEM 2023 - Day 2", "INEP", &["Mathematics", "Natural Sciences"], Difficulty::Hard, 30),
        listing(3, "FUVEST 2024 - First Phase", "FUVEST", &["Mathematics", "Languages"], Difficulty::Hard, 20),
        listing(4, "UNICAMP 2024 - Warm-up", "COMVEST", &["Natural Sciences"], Difficulty::Medium, 15),
        listing(5, "Public Exam Basics", "CESPE", &["Humanities", "Languages"], Difficulty::Easy, 10),
        listing(6, "Quick Math Drill", "CESPE", &["Mathematics"], Difficulty::Easy, 5),
    ]
}
