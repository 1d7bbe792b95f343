//! The invoice record a DANFE is rendered from.
//!
//! Records are built by an external loader (usually from JSON). Loading is
//! lenient: missing, `null` and loosely typed fields are accepted, and
//! [`InvoiceRecord::data_gaps`] reports what will be printed as a placeholder.

pub mod access_key;
pub mod gaps;
mod lenient;
pub mod record;

pub use access_key::{ACCESS_KEY_LEN, AccessKey, KeyStatus};
pub use gaps::{DataGap, GapKind};
pub use record::{Duplicate, InvoiceRecord, LineItem, Party, Totals, Transporter, Volumes};
