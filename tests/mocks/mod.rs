pub mod mock_relay;

#[allow(unused_imports)]
pub use mock_relay::MockRelay;
