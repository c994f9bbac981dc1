mod appliance;
mod common;
mod contact;
mod document;
mod maintenance;

pub mod prelude;
