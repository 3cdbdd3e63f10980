// Document-store traits and in-memory adapters. The HTTP layer only sees
// the traits; swapping the in-memory adapters for a real document store is
// a matter of providing new implementations.

pub mod errors;
pub use errors::*;

pub mod users;
pub use users::*;

pub mod trips;
pub use trips::*;

pub mod personality;
pub use personality::*;
