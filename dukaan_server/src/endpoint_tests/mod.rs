
mod auth;
mod orders;
mod products;
mod profiles;
mod shops;
