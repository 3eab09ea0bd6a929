pub mod student_file;

pub use student_file::StudentStore;
