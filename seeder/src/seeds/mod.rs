pub mod attendance;
pub mod class_session;
pub mod course;
pub mod enrollment;
pub mod profile;
