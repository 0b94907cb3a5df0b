pub mod exercise;
pub mod exercise_list;
