pub mod daily_selection;
pub mod show;
pub mod vote;
