pub mod discord;
pub mod slug;
