/// A listing page and the fixed, inclusive house-id window it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingPage {
    pub number: u8,
    pub path: &'static str,
    pub first_id: i64,
    pub last_id: i64,
}

#[cfg(test)]
impl ListingPage {
    pub fn contains(&self, house_id: i64) -> bool {
        (self.first_id..=self.last_id).contains(&house_id)
    }
}

// Windows are keyed to seeding order, not computed from row counts.
pub const PAGES: [ListingPage; 6] = [
    ListingPage { number: 1, path: "/bulosan", first_id: 1, last_id: 4 },
    ListingPage { number: 2, path: "/bulosan2", first_id: 5, last_id: 8 },
    ListingPage { number: 3, path: "/bulosan3", first_id: 9, last_id: 12 },
    ListingPage { number: 4, path: "/bulosan4", first_id: 13, last_id: 16 },
    ListingPage { number: 5, path: "/bulosan5", first_id: 17, last_id: 20 },
    ListingPage { number: 6, path: "/bulosan6", first_id: 21, last_id: 24 },
];

pub fn page_by_path(path: &str) -> Option<&'static ListingPage> {
    PAGES.iter().find(|p| p.path == path)
}

/// The page a house belongs on. Ids below the first window land on page 1,
/// ids past the last window on page 6.
pub fn page_for_house(house_id: i64) -> &'static ListingPage {
    PAGES
        .iter()
        .find(|p| house_id <= p.last_id)
        .unwrap_or(&PAGES[PAGES.len() - 1])
}
