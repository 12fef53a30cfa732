//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the creation form, the editable list, the inline editor
//! and the product table. Each owns its transient state in a local signal and
//! reaches the page only through the `PageData` re-fetch trigger in context.

pub mod product_table;
pub mod todo_editor;
pub mod todo_form;
pub mod todo_list;
pub mod todo_row;
