/// One page of a derived list plus the metadata needed to render a pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage<T> {
    pub items: Vec<T>,
    pub total_matched: usize,
    /// `ceil(total_matched / page_size)`; zero exactly when nothing matched.
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> ResultPage<T> {
    pub fn new(items: Vec<T>, total_matched: usize, page: usize, page_size: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        Self { items, total_matched, total_pages: total_matched.div_ceil(page_size), page, page_size }
    }

    pub fn empty(page: usize, page_size: usize) -> Self { Self::new(Vec::new(), 0, page, page_size) }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn has_previous(&self) -> bool { self.page > 1 }

    pub fn has_next(&self) -> bool { self.page < self.total_pages }

    /// 1-based inclusive range of the items on this page ("Showing 11 to 20 of 25").
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() { return None; }
        let start = (self.page - 1) * self.page_size + 1;
        let end = (self.page * self.page_size).min(self.total_matched);
        Some((start, end))
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> ResultPage<U> {
        ResultPage {
            items: self.items.into_iter().map(f).collect(),
            total_matched: self.total_matched,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let p = ResultPage::new(vec![1, 2, 3, 4, 5], 25, 3, 10);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.showing(), Some((21, 25)));
        assert!(p.has_previous());
        assert!(!p.has_next());
    }

    #[test]
    fn empty_page_has_no_pages() {
        let p: ResultPage<u8> = ResultPage::empty(1, 10);
        assert_eq!(p.total_pages, 0);
        assert_eq!(p.showing(), None);
        assert!(!p.has_next());
    }
}
