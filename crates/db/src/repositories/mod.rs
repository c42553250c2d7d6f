//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod selection_repo;
pub mod show_repo;
pub mod vote_repo;

pub use selection_repo::SelectionRepo;
pub use show_repo::ShowRepo;
pub use vote_repo::VoteRepo;
