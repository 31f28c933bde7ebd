pub mod app;
pub mod customer;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod login;
pub mod mvi;
pub mod navigation;
pub mod onboarding;
pub mod registration;
pub mod render;
pub mod rider;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod tracking;
pub mod vendor;
pub mod widgets;
