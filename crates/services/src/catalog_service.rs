use std::sync::Arc;

use exam_core::catalog::{disciplines, institutions};
use exam_core::model::{Difficulty, ExamId, ExamListing};
use exam_core::{Catalog, CatalogFilter};

/// Filtered listings plus the facets a selection page offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    pub listings: Vec<ExamListing>,
    pub institutions: Vec<String>,
    pub disciplines: Vec<String>,
    pub difficulties: Vec<Difficulty>,
}

#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn listing(&self, id: ExamId) -> Option<ExamListing> {
        self.catalog.listing(id).cloned()
    }

    /// Listings matching `filter`; facets are derived from the matches.
    #[must_use]
    pub fn search(&self, filter: &CatalogFilter) -> CatalogPage {
        let listings = self.catalog.search(filter);
        CatalogPage {
            institutions: institutions(&listings),
            disciplines: disciplines(&listings),
            difficulties: Difficulty::ALL.to_vec(),
            listings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facets_follow_the_result() {
        let svc = CatalogService::new(Arc::new(Catalog::builtin().unwrap()));
        let all = svc.search(&CatalogFilter::default());
        assert_eq!(all.listings.len(), 6);
        assert_eq!(all.institutions.len(), 4);
        assert_eq!(all.difficulties, Difficulty::ALL.to_vec());

        let mut filter = CatalogFilter::default();
        filter.toggle_institution("INEP");
        let inep = svc.search(&filter);
        assert_eq!(inep.listings.len(), 2);
        assert_eq!(inep.institutions, vec!["INEP"]);
        assert_eq!(
            inep.disciplines,
            vec!["Humanities", "Languages", "Mathematics", "Natural Sciences"]
        );
    }

    #[test]
    fn unknown_listing_is_none() {
        let svc = CatalogService::new(Arc::new(Catalog::builtin().unwrap()));
        assert!(svc.listing(ExamId::new(0)).is_none());
        assert_eq!(svc.listing(ExamId::new(1)).unwrap().institution, "INEP");
    }
}
