//! Rent schedule engine: input validation, rent-change normalization, and
//! payment date generation.

pub mod agreement;
pub mod changes;
pub mod frequency;
pub mod generator;
pub mod payment_method;
pub mod summary;
pub mod validation;

pub use agreement::{RentAgreement, RentDetails, RentRequest};
pub use changes::{normalize_rent_changes, RentChange, RentChangeCursor, RentChangeDetails};
pub use frequency::Frequency;
pub use generator::{generate, Occurrences, PaymentRecord};
pub use payment_method::PaymentMethod;
pub use summary::ScheduleSummary;
