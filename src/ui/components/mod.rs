pub mod movie_card;
pub mod search_bar;
pub mod search_hooks;
pub mod search_page;
pub mod spinner;
pub mod trending_section;

pub use movie_card::MovieCard;
pub use search_bar::SearchBar;
pub use search_hooks::{use_search_service, use_search_state, SearchStateProvider};
pub use search_page::SearchPage;
pub use spinner::Spinner;
pub use trending_section::TrendingSection;
