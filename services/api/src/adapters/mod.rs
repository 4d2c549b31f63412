pub mod cache;
pub mod chat_llm;
pub mod contact_log;
pub mod db;
pub mod memory;

pub use cache::CachedPortfolioStore;
pub use chat_llm::OpenAiChatAdapter;
pub use contact_log::LogContactNotifier;
pub use db::DbAdapter;
pub use memory::MemoryStore;
