//! Route state for page navigation.

use std::any::Any;

use sneat_states::{State, assign_impl};

/// Which page the application shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Login,
    Users,
}

impl Route {
    pub const ALL: [Self; 2] = [Self::Login, Self::Users];

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Users => "Users",
        }
    }
}

impl State for Route {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}
