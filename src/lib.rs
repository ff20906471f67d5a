#![doc(test(attr(deny(warnings))))]

//! Rent Schedule computes rent payment dates and amounts for a lease, applying
//! mid-lease rent changes and the processing lead time of the payment method.
//!
//! ```
//! use rent_schedule::schedule::{RentAgreement, RentDetails};
//!
//! let details = RentDetails {
//!     rent_amount: 1000.0,
//!     rent_frequency: "weekly".into(),
//!     rent_start_date: "2025-07-01".into(),
//!     rent_end_date: "2025-07-22".into(),
//!     payment_method: None,
//! };
//! let agreement = RentAgreement::new(&details, &[]).unwrap();
//! assert_eq!(agreement.generate().len(), 4);
//! ```

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod schedule;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Rent Schedule tracing initialized.");
    });
}
