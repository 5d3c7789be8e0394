pub mod clock;
pub mod duty;
pub mod sheet_row;
pub mod trip;

pub use clock::{ClockTime, DutyDuration};
pub use duty::{DutyEntry, DutyKind, FlightLeg};
pub use sheet_row::{DayType, SheetRow};
pub use trip::Trip;
