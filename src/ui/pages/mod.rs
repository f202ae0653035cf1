pub mod history;
pub mod inbox;

pub use history::HistoryPage;
pub use inbox::InboxPage;
