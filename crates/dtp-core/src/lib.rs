pub mod datetime;
pub mod month;
pub mod plan;
pub mod visibility;

pub use month::{
  MONTH_NAMES,
  MonthOfYear,
  month_name
};
pub use plan::{
  MonthLabel,
  PickerPlan
};
pub use visibility::Visibility;
