pub mod errors;
pub mod db;
pub mod member;
pub mod member_ai;
pub mod member_ai_field;
pub mod member_job;

#[cfg(test)]
mod tests;
