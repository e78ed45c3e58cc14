mod fake_oracle;

pub use fake_oracle::{FakeOracle, SentMessage};
