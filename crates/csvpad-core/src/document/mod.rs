//! Document state and logic (UI-agnostic).

mod io;
mod ops;
pub mod pager;
mod paste;
mod state;
mod window;

pub use io::LoadSummary;
pub use pager::{DEFAULT_ROWS_PER_PAGE, PageButton, Pager, page_buttons};
pub use paste::{PastePolicy, split_paste_block};
pub use state::{Document, DocumentOptions};
pub use window::{PageWindow, WindowRow};
