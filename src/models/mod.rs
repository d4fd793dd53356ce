mod infrastructures;
mod locations;
mod switches;
mod vendors;

pub use infrastructures::*;
pub use locations::*;
pub use switches::*;
pub use vendors::*;
