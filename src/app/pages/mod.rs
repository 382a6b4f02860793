//! Page components, one per route.

pub mod ebooks;
pub mod gallery;
pub mod generator;
pub mod home;
pub mod latest;
pub mod login;
pub mod not_found;
pub mod stories;

pub use ebooks::Ebooks;
pub use gallery::Gallery;
pub use generator::Generator;
pub use home::Home;
pub use latest::Latest;
pub use login::Login;
pub use not_found::NotFound;
pub use stories::Stories;
