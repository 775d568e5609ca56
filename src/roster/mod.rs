pub mod reader;
pub mod writer;

pub use reader::{read_roster, read_roster_from, RosterRecord};
pub use writer::{format_line, write_list};
