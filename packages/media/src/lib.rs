//! # formdeck media
//!
//! Network and file collaborators for the media, background and settings
//! panels. Nothing here touches a form: results land in panel-local state
//! and are committed only when the panel applies.
//!
//! - [`UnsplashClient`]: paged photo search
//! - [`SearchFeed`]: displayed results, with stale responses dropped
//! - [`upload`]: local files read as data URLs

pub mod error;
pub mod feed;
pub mod unsplash;
pub mod upload;

pub use error::{MediaError, MediaResult};
pub use feed::{FeedUpdate, SearchFeed, SearchTicket};
pub use unsplash::{
    effective_query, ImageSearch, ImageUrls, Photographer, SearchPage, UnsplashClient,
    UnsplashImage, DEFAULT_QUERY, PER_PAGE, UNSPLASH_API,
};
pub use upload::{read_as_data_url, read_brand_logo, read_image, MAX_LOGO_BYTES};
