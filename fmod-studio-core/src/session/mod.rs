pub mod studio_session;
