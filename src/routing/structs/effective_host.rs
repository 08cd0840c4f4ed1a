/// Stored in the request extensions when the host was rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveHost(pub String);
