// src/application/ports/mod.rs
pub mod notification;
pub mod security;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type TokenManagerPort = dyn security::TokenManager;
pub type ClockPort = dyn time::Clock;
pub type EmailSenderPort = dyn notification::EmailSender;
pub type SocialChannelPort = dyn notification::SocialChannel;
pub type PublishEventSinkPort = dyn notification::PublishEventSink;
