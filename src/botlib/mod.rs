pub mod audit;
pub mod durationstring;
pub mod text;

/// Long-lived state shared with every command invocation.
pub struct Data {
    pub config: crate::config::Config,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>; // This is constant and should be copy pasted
pub type Command = poise::Command<Data, Error>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
