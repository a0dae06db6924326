//! Sentiment analysis adapters.

mod vader;

pub use vader::VaderSentimentAnalyzer;
