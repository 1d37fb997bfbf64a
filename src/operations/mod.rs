//! Wire shapes of the individual Replicon operations.

pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
