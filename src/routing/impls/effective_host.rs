use crate::routing::structs::effective_host::EffectiveHost;

impl EffectiveHost {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EffectiveHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
