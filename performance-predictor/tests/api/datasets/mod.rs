pub(crate) mod students;
