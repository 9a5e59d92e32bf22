pub mod file_reader;
pub mod file_writer;
pub mod roster_reader;

pub use file_reader::FileReader;
pub use file_writer::FileWriter;
pub use roster_reader::{RosterFormat, RosterReader};
