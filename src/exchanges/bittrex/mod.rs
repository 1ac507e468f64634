pub mod builder;
pub mod connector;

// Re-export main types for easier importing
pub use builder::{build_connector, build_public_connector, BittrexBuilder};
pub use connector::{Account, BittrexConnector, MarketData, Trading};
