//! Top-N ranking by watch count.
//!
//! Rankings order the candidate pool *ascending* by watch count, so the
//! least-watched titles come first. The daily report has always been
//! produced this way and the ordering is kept as-is.

use crate::error::Result;
use crate::library::Library;
use crate::types::*;
use tracing::debug;

impl Library {
    /// Rank the library and keep at most `limit` items.
    ///
    /// The pool is the whole library in insertion order when
    /// `content_type` is `None`, otherwise [`get_movies`](Self::get_movies)
    /// or [`get_series`](Self::get_series). The sort is stable, so items with
    /// equal watch counts keep their pool order. Asking for more items than
    /// the pool holds returns the whole pool.
    pub fn top_titles(&self, limit: usize, content_type: Option<ContentType>) -> Vec<&PlayableItem> {
        if limit == 0 {
            return Vec::new();
        }

        let mut pool: Vec<&PlayableItem> = match content_type {
            None => self.items.iter().collect(),
            Some(ContentType::Movie) => self.get_movies(),
            Some(ContentType::Series) => self.get_series(),
        };

        pool.sort_by_key(|item| item.watch_count());
        pool.truncate(limit.min(pool.len()));

        debug!(
            "Ranked {} item(s) for limit {} (filter: {:?})",
            pool.len(),
            limit,
            content_type
        );
        pool
    }

    /// Same as [`top_titles`](Self::top_titles) but takes the filter as text.
    ///
    /// # Errors
    /// [`CatalogError::InvalidContentType`](crate::CatalogError::InvalidContentType)
    /// when the filter is neither `Movie` nor `Series`. A `limit` of zero
    /// returns an empty list before the filter is looked at.
    pub fn get_top_titles(&self, limit: usize, content_type: Option<&str>) -> Result<Vec<&PlayableItem>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let content_type = content_type.map(str::parse::<ContentType>).transpose()?;
        Ok(self.top_titles(limit, content_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use std::io::sink;

    /// Plays the item at `index` the given number of times
    fn watch(library: &mut Library, index: usize, times: usize) {
        let mut out = sink();
        for _ in 0..times {
            library.items[index].play(&mut out).unwrap();
        }
    }

    fn titles(items: &[&PlayableItem]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn test_least_watched_movie_comes_first() {
        let mut library = Library::new();
        library.add_movie("B", 2001, "Drama");
        library.add_movie("A", 2000, "Drama");
        watch(&mut library, 0, 5);
        watch(&mut library, 1, 10);

        let top = library.get_top_titles(1, Some("Movie")).unwrap();

        assert_eq!(top.len(), 1);
        assert_eq!(top[0].title(), "B");
    }

    #[test]
    fn test_zero_limit_is_empty() {
        let library = Library::sample();

        assert!(library.top_titles(0, None).is_empty());
        assert!(library.get_top_titles(0, None).unwrap().is_empty());
        assert!(library.get_top_titles(0, Some("Series")).unwrap().is_empty());
        // The filter is not validated when nothing is requested
        assert!(library.get_top_titles(0, Some("Unknown")).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_content_type_is_rejected() {
        let library = Library::sample();

        let err = library.get_top_titles(3, Some("Unknown")).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidContentType { .. }));

        let empty = Library::new();
        assert!(empty.get_top_titles(1, Some("Documentary")).is_err());
    }

    #[test]
    fn test_content_type_must_match_exactly() {
        let library = Library::sample();

        for filter in ["movies", "series", "MOVIE", " Series ", "Movies"] {
            let result = library.get_top_titles(3, Some(filter));
            assert!(
                matches!(result, Err(CatalogError::InvalidContentType { ref value }) if value == filter),
                "{filter:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_limit_larger_than_pool_returns_everything() {
        let library = Library::sample();

        assert_eq!(library.top_titles(100, None).len(), 11);
        assert_eq!(library.top_titles(100, Some(ContentType::Movie)).len(), 3);
        assert_eq!(library.get_top_titles(9, Some("Series")).unwrap().len(), 8);
        assert!(Library::new().top_titles(3, None).is_empty());
    }

    #[test]
    fn test_filter_restricts_pool() {
        let mut library = Library::new();
        library.add_series_entry("Lost", 2004, "Drama", 1, 1);
        library.add_movie("Heat", 1995, "Crime");
        library.add_series_entry("Dark", 2017, "Sci-Fi", 1, 1);

        let movies = library.top_titles(5, Some(ContentType::Movie));
        assert!(movies.iter().all(|item| item.is_movie()));

        let series = library.top_titles(5, Some(ContentType::Series));
        assert_eq!(titles(&series), ["Dark S01E01", "Lost S01E01"]);
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let mut library = Library::new();
        library.add_movie("Zodiac", 2007, "Thriller");
        library.add_movie("Alien", 1979, "Horror");
        library.add_movie("Memento", 2000, "Thriller");
        watch(&mut library, 2, 4);

        // Unfiltered pool is library order
        assert_eq!(
            titles(&library.top_titles(3, None)),
            ["Zodiac (2007)", "Alien (1979)", "Memento (2000)"]
        );

        // Movie pool is title order
        assert_eq!(
            titles(&library.top_titles(3, Some(ContentType::Movie))),
            ["Alien (1979)", "Zodiac (2007)", "Memento (2000)"]
        );
    }
}
