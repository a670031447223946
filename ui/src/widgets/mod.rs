mod login;
mod users;

pub use login::login_widget;
pub use users::users_panel;
