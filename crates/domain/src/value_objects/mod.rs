//! Value Objects - Immutable, identity-less domain primitives

mod condition;
mod country_code;
mod geo_location;
mod location_query;
mod timezone;
mod ui_state;

pub use condition::{WeatherIcon, WeatherTheme};
pub use country_code::CountryCode;
pub use geo_location::GeoLocation;
pub use location_query::{LocationQuery, MIN_QUERY_LENGTH, fold_case};
pub use timezone::Timezone;
pub use ui_state::{UiEvent, UiState};
