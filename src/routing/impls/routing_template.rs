use crate::routing::structs::routing_template::RoutingTemplate;

impl RoutingTemplate {
    pub const TOKEN_PLACEHOLDER: &'static str = "{{token}}";

    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    pub fn has_placeholder(&self) -> bool {
        self.template.contains(Self::TOKEN_PLACEHOLDER)
    }

    /// Substitutes the first placeholder only. Later occurrences stay literal.
    pub fn render(&self, token: &str) -> String {
        self.template.replacen(Self::TOKEN_PLACEHOLDER, token, 1)
    }
}

impl std::fmt::Display for RoutingTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.template)
    }
}
