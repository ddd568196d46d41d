pub mod auth;
pub mod contact;
pub mod experience;
pub mod functions;
pub mod post;
pub mod profile;
pub mod project;
pub mod skill;
pub mod storage;
pub mod video;
