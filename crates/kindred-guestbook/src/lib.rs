//! Kindred Guestbook
//!
//! Supplies the deduction engine with its inputs. Loads memorial guestbook
//! data from JSON, normalizes raw entries into authors, and implements the
//! domain's [`AuthorSource`](kindred_domain::traits::AuthorSource) and
//! [`ReferenceDirectory`](kindred_domain::traits::ReferenceDirectory) traits.
//!
//! # Data file
//!
//! ```json
//! {
//!   "deceased": [
//!     { "id": "0190a7f6-1c2b-7d3e-8f40-000000000001", "first_name": "Jean", "last_name": "Dupont" }
//!   ],
//!   "entries": [
//!     {
//!       "id": "0190a7f6-1c2b-7d3e-8f40-000000000010",
//!       "deceased_id": "0190a7f6-1c2b-7d3e-8f40-000000000001",
//!       "first_name": "Marie",
//!       "last_name": "Dupont",
//!       "relation": "CHILD",
//!       "message": "Merci papa",
//!       "created_at": 1700000000
//!     }
//!   ]
//! }
//! ```
//!
//! Relations are matched case-insensitively against the relation
//! identifiers; anything else becomes the configured default relation.

#![warn(missing_docs)]

mod config;
mod entry;
mod error;
mod guestbook;

pub use config::GuestbookConfig;
pub use entry::GuestbookEntry;
pub use error::GuestbookError;
pub use guestbook::{Guestbook, GuestbookData};
