//! `DeviceContext`: an ambient, read-only datum injected per `Machine001`
//! invocation and surfaced only through the `DEVICEID` opcode. There is no
//! global mutable state here: the context is a plain borrowed value,
//! created and destroyed with each call.

/// A device identifier. The evaluator only accepts it as exactly 32 bytes;
/// other lengths are legal to *construct* (useful for exercising the
/// `NoDeviceContext` error path) but always fail `DEVICEID`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceContext(Vec<u8>);

impl DeviceContext {
    pub fn new(id: impl Into<Vec<u8>>) -> Self {
        Self(id.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
