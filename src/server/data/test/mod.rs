mod booking;
mod item_request;
mod user;
