//! Placement frequency.
//!
//! Decides whether a slot after a given topic or post should carry an ad.
//! Positions are 1-based, as the forum numbers posts.

use crate::models::PlacementConfig;

/// Kind of content stream an ad is inserted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Topic lists (latest, category pages)
    TopicList,
    /// Posts inside a topic
    PostStream,
}

/// Show-every-N rule for one content stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementFrequency {
    stream: Stream,
    every: usize,
}

impl PlacementFrequency {
    pub fn new(stream: Stream, every: usize) -> Self {
        Self { stream, every }
    }

    pub fn from_config(config: &PlacementConfig, stream: Stream) -> Self {
        let every = match stream {
            Stream::TopicList => config.between_topics,
            Stream::PostStream => config.between_posts,
        };
        Self::new(stream, every)
    }

    /// Should an ad follow the item at `position`?
    ///
    /// Post streams also carry an ad right after the opening post.
    pub fn should_place(&self, position: usize) -> bool {
        if self.every == 0 || position == 0 {
            return false;
        }
        match self.stream {
            Stream::PostStream if position == 1 => true,
            _ => position % self.every == 0,
        }
    }
}
