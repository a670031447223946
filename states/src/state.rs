use std::any::{Any, type_name};
use std::fmt::Debug;

/// Plain, user-editable data stored in a [`StateCtx`](crate::StateCtx).
///
/// States are written directly through `StateCtx::state_mut` (which marks them
/// dirty) or queued through an [`Updater`](crate::Updater).
pub trait State: Any + Debug {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a value sent through an `Updater`.
    fn assign_box(&mut self, new_self: Box<dyn Any>);
}

/// Shared body for `State::assign_box` and `Compute::assign_box`.
pub fn assign_impl<T: Any>(target: &mut T, new_self: Box<dyn Any>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => log::error!(
            "assign_impl: received a value that is not a {}",
            type_name::<T>()
        ),
    }
}
