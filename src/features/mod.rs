pub mod leads;
pub mod showcase;
