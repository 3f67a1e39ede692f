pub mod holiday;
pub mod moment;

pub use holiday::{Holiday, HolidaySet};
pub use moment::{WorkingMoment, BUSINESS_TZ};
