mod helpers;
mod login;
mod users;
