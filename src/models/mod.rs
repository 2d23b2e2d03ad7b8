pub mod day_record;
pub mod field;
pub mod form;
pub mod period;

pub use day_record::DayRecord;
pub use field::{FIELDS, FieldSpec};
pub use form::FormInput;
pub use period::Period;
