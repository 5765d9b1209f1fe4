//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – animation cursor over a borrowed frame list
//! - [`animationset`] – clips per movement state (idle, walk, jump)
//! - [`boxcollider`] – axis-aligned rectangular collider
//! - [`grounded`] – whether the entity is standing on a platform
//! - [`inputcontrolled`] – keyboard-driven run/jump movement
//! - [`mapposition`] – world-space position of an entity
//! - [`rigidbody`] – velocity and gravity
//! - [`sprite`] – displayed texture plus its animation
//! - [`worldbound`] – clamp/bounce at world edges, camera target marker
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod animationset;
pub mod boxcollider;
pub mod grounded;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
pub mod sprite;
pub mod worldbound;
pub mod zindex;
