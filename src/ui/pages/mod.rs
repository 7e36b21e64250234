//! Application pages module
//!
//! - Home (signed-in placeholder)
//! - Login page
//! - Signup page

mod auth_layout;
mod home;
mod login;
mod not_found;
mod signup;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
