mod activity;
mod activity_type;
mod contact;
mod deal;
mod lookup;
mod record;

pub use activity::*;
pub use activity_type::*;
pub use contact::*;
pub use deal::*;
pub use lookup::*;
pub use record::*;
