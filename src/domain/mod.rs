mod student_email;

pub use student_email::*;
