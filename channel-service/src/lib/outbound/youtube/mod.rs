pub mod channel;

pub use channel::YoutubeChannelClient;
