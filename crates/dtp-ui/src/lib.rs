mod picker;
mod surface;

pub use picker::{DateTimePicker, DateTimePickerProps};
