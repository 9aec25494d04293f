// View-state machines
//
// Transient UI state that is not part of the parsed data model, kept as
// explicit state machines so platform bindings stay thin adapters.

pub mod lightbox;

pub use lightbox::LightboxState;
