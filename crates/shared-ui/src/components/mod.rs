// Building blocks
pub mod badge;
pub mod button;
pub mod card;
pub mod modal;

// Dashboard pieces, built on the blocks above
pub mod client_table;
pub mod doc_item;
pub mod nav_item;
pub mod stat_card;
pub mod timeline;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use client_table::*;
pub use doc_item::*;
pub use modal::*;
pub use nav_item::*;
pub use stat_card::*;
pub use timeline::*;
