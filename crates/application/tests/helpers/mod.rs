pub mod mock_repositories;

pub use mock_repositories::{MockHistoryRepository, MockResolver};
