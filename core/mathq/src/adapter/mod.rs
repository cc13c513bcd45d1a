//! アダプタレイヤー

mod stub_provider;

#[cfg(test)]
pub use stub_provider::StubProvider;
