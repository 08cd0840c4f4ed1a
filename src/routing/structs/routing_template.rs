#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTemplate {
    pub(crate) template: String,
}
