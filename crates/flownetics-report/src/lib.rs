//! ROI analysis report generation.
//!
//! Turns a snapshot of the website's ROI calculator ([`ReportData`]) into an
//! HTML summary fragment and a complete branded email document. Everything
//! here is pure formatting and arithmetic: no I/O, no shared state, safe to
//! call from any number of request handlers at once.
//!
//! Rendering never fails. Missing numbers degrade to `0`-style output; callers
//! that want to reject malformed input call [`ReportData::validate`] first.
//!
//! ```
//! use flownetics_report::{ReportData, generate};
//!
//! let data = ReportData {
//!     currency: Some("INR".into()),
//!     currency_symbol: Some("₹".into()),
//!     roi_months: Some(18.0),
//!     total_cost_client_inr: Some(1_000_000.0),
//!     savings_after_faas_inr: Some(250_000.0),
//!     ..Default::default()
//! };
//!
//! assert_eq!(data.metrics().roi_percentage, "25.0");
//! let doc = generate("Ada", &data);
//! assert!(doc.summary_html.contains("₹ 1,000,000"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod currency;
pub mod data;
pub mod email;
pub mod error;
pub mod summary;

pub use currency::{conversion_rate, group_thousands, to_fixed};
pub use data::ReportData;
pub use email::{EMAIL_SUBJECT, ReportDocument, generate, render_email};
pub use error::{ReportError, Result};
pub use summary::{RoiMetrics, SummaryRow, render_summary};
