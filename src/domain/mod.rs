mod account;
mod clock;
mod money;
mod operation;

pub use account::*;
pub use clock::*;
pub use money::*;
pub use operation::*;
