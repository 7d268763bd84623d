pub mod member;
pub mod band;
pub mod event;
pub mod entry;
pub mod lottery;
pub mod notice;
