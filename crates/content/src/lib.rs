//! Homepage content managed from the admin dashboard: application tiles,
//! grid cards, the announcement banner and visitor statistics.

pub mod apps;
pub mod banner;
pub mod cards;
pub mod visits;

pub use apps::{
    App, AppForm, BUILTIN_PREFIX, builtin_apps, create_app, delete_app, get_app, is_builtin, list_apps, update_app,
};
pub use banner::{Banner, BannerStyle, BannerUpdate};
pub use cards::{CardDeck, GridCard, default_cards};
pub use visits::{DayCount, HourCount, Visit, Visitor, VisitorStats, detect_browser, detect_os};
