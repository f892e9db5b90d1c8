pub mod delimited_writer;

pub use delimited_writer::DelimitedWriter;
