pub mod db;
pub mod error;
pub mod group;
pub mod invitation;
pub mod notification;
pub mod routes;
pub mod state;
pub mod user;

#[cfg(test)]
mod test_support;
