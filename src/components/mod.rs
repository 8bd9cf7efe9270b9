//! UI Components
//!
//! Reusable Leptos components.

mod item_list;
mod list_header;
mod new_item_form;
mod shopping_item_row;

pub use item_list::ItemList;
pub use list_header::ListHeader;
pub use new_item_form::NewItemForm;
pub use shopping_item_row::ShoppingItemRow;
