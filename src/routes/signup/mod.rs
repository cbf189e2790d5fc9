mod confirmation;
mod post;

pub use confirmation::*;
pub use post::*;
