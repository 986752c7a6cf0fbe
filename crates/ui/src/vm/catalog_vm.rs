use exam_core::model::{ExamId, ExamListing};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingCardVm {
    pub id: ExamId,
    pub title: String,
    pub institution: String,
    pub disciplines: String,
    pub difficulty: &'static str,
    pub duration: String,
    pub question_count: u32,
}

impl From<&ExamListing> for ListingCardVm {
    fn from(listing: &ExamListing) -> Self {
        Self {
            id: listing.id,
            title: listing.title.clone(),
            institution: listing.institution.clone(),
            disciplines: listing.disciplines.join(", "),
            difficulty: listing.difficulty.label(),
            duration: format!("{} min", listing.duration_minutes),
            question_count: listing.question_count,
        }
    }
}

#[must_use]
pub fn map_listing_cards(listings: &[ExamListing]) -> Vec<ListingCardVm> {
    listings.iter().map(ListingCardVm::from).collect()
}
