pub mod holiday_api;

pub use holiday_api::HolidayApiClient;
