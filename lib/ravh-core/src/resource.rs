//! Behaviour shared by every resource kind

use std::fmt::Debug;

/// A named resource managed through the control plane.
///
/// Some attributes are filled in by the control plane after a write is
/// accepted. Clients read the resource back and hand the observed value to
/// [`ManagedResource::absorb_server_fields`] so the caller's copy ends up
/// complete.
pub trait ManagedResource: Clone + Debug + Send + Sync + 'static {
    /// Human readable kind, used in errors and logs
    const KIND: &'static str;

    /// Identity of the resource; never changes after creation
    fn name(&self) -> &str;

    /// Copy the server-assigned attributes of `observed` into `self`
    fn absorb_server_fields(&mut self, observed: &Self);
}
