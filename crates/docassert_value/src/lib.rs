//! Runtime values for docassert.
//!
//! Every stage of the pipeline speaks in terms of [`Value`]: the type
//! registry produces them from directive tokens, documented symbols consume
//! and return them, and the comparator checks them for equality.
//!
//! Values are cheap to clone. Strings and field maps sit behind `Arc`, so a
//! fixture can be handed to a symbol and still be reported afterwards.

mod value;

pub use value::{Instance, Record, Value};
