pub mod context;
pub mod domain;
pub mod ports;
pub mod prompt;

pub use context::PortfolioContext;
pub use domain::{
    ChatMessage, ChatRole, ContactSubmission, Education, Experience, NewChatMessage,
    NewEducation, NewExperience, NewProfile, NewProject, NewSkill, Profile, Project, Skill,
};
pub use ports::{
    ChatLogStore, CompletionService, ContactNotifier, PortError, PortResult, PortfolioStore,
};
pub use prompt::build_instructions;
