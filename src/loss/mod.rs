mod collect;
mod parse;

pub use collect::load_records;
pub use parse::RawRecord;
