//! Route handlers, organized by resource:
//! - home: service identity
//! - health: liveness probe
//! - hospitals: hospital directory (read-only)
//! - donors: donor listing and registration

pub mod donors;
pub mod health;
pub mod home;
pub mod hospitals;
