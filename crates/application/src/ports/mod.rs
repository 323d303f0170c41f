pub mod history_repository;
pub mod resolver;

pub use history_repository::HistoryRepository;
pub use resolver::ARecordResolver;
