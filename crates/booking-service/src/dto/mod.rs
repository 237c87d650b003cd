//! 请求和响应的数据传输对象

mod request;
mod response;

pub use request::{ArtistForm, SearchForm, ShowForm, VenueForm, aggregate_errors};
pub use response::{
    ArtistDetail, ArtistFormPage, ArtistsPage, ErrorPage, Page, SearchResults, ShowFormPage,
    ShowsPage, VenueDetail, VenueFormPage, VenuesPage,
};
