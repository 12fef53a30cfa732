//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each interactive component owns one small state machine here. Machines
//! split every write into `begin_*` (validate, mark busy, build the request)
//! and `finish_*` (apply the store's answer), so the component can issue the
//! request in between without holding a borrow across the await. None of
//! them keeps a local copy of the collection: a confirmed write only asks the
//! page to re-fetch.

pub mod collection;
pub mod create_form;
pub mod editor;
pub mod page;
pub mod row;
