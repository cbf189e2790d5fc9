mod health_check;
mod home;
mod signup;

// re-export
pub use health_check::*;
pub use home::*;
pub use signup::*;
