pub mod albums;
pub mod artists;
pub mod bands;
pub mod dashboard;
pub mod dispatch;
pub mod genres;
pub mod seed_demo;
pub mod songs;
pub mod users;
