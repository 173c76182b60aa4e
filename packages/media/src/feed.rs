//! # Search Feed
//!
//! Panel-local state for an image search: the current query, the images
//! shown, and whether another page can be loaded.
//!
//! Every request is issued as a [`SearchTicket`] carrying the feed's
//! generation. A new search bumps the generation, so a response that
//! arrives for an older search is dropped instead of replacing newer
//! results. Failures are logged and leave the previous images in place.
//!
//! ```rust,ignore
//! let ticket = feed.search("mountains");
//! let response = ticket.fetch(&client).await;
//! feed.complete(&ticket, response);
//! ```

use crate::error::MediaResult;
use crate::unsplash::{effective_query, ImageSearch, SearchPage, UnsplashImage};
use tracing::{debug, error};

/// One issued request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
    pub page: u32,
    /// Load-more requests extend the list instead of replacing it
    pub append: bool,
}

impl SearchTicket {
    pub async fn fetch<S: ImageSearch>(&self, search: &S) -> MediaResult<SearchPage> {
        search.search(&self.query, self.page).await
    }
}

/// What [`SearchFeed::complete`] did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedUpdate {
    Replaced,
    Appended,
    /// The response belonged to a superseded search
    Stale,
    /// The request failed; previous images are kept
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct SearchFeed {
    query: String,
    page: u32,
    images: Vec<UnsplashImage>,
    has_more: bool,
    loading: bool,
    generation: u64,
}

impl SearchFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search; any request still in flight becomes stale
    pub fn search(&mut self, query: &str) -> SearchTicket {
        self.generation += 1;
        self.query = effective_query(query).to_string();
        self.page = 1;
        self.loading = true;
        self.ticket(1, false)
    }

    /// Request the next page, unless one is loading or none is left
    pub fn load_more(&mut self) -> Option<SearchTicket> {
        if self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        Some(self.ticket(self.page + 1, true))
    }

    fn ticket(&self, page: u32, append: bool) -> SearchTicket {
        SearchTicket {
            generation: self.generation,
            query: self.query.clone(),
            page,
            append,
        }
    }

    /// Fold a response into the feed
    pub fn complete(&mut self, ticket: &SearchTicket, response: MediaResult<SearchPage>) -> FeedUpdate {
        if ticket.generation != self.generation {
            debug!(
                query = %ticket.query,
                generation = ticket.generation,
                current = self.generation,
                "Dropping stale search response"
            );
            return FeedUpdate::Stale;
        }
        self.loading = false;

        match response {
            Ok(page) => {
                self.page = page.page;
                self.has_more = page.has_more;
                if ticket.append {
                    self.images.extend(page.images);
                    FeedUpdate::Appended
                } else {
                    self.images = page.images;
                    FeedUpdate::Replaced
                }
            }
            Err(e) => {
                error!(query = %ticket.query, page = ticket.page, error = %e, "Error fetching images");
                FeedUpdate::Failed
            }
        }
    }

    /// Issue a search and fold in its response
    pub async fn refresh<S: ImageSearch>(&mut self, search: &S, query: &str) -> FeedUpdate {
        let ticket = self.search(query);
        let response = ticket.fetch(search).await;
        self.complete(&ticket, response)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn images(&self) -> &[UnsplashImage] {
        &self.images
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Reached the end of the results after at least one page
    pub fn is_exhausted(&self) -> bool {
        !self.has_more && !self.images.is_empty()
    }
}
