pub mod errors;
pub mod db;
pub mod patient;

#[cfg(test)]
mod tests;
