//! Pages module for the application.
//!
//! One page per [`Route`](sneat_business::Route):
//! - `login_page`: the credentials form
//! - `users_page`: the user management table

mod login_page;
mod users_page;

pub use login_page::login_page;
pub use users_page::users_page;
