use crate::routing::structs::routing_resolver::RoutingResolver;
use std::rc::Rc;
use std::sync::Arc;

#[derive(Clone)]
pub struct RoutingMiddleware {
    pub(crate) resolver: Arc<RoutingResolver>,
}

pub struct RoutingMiddlewareService<S> {
    pub(crate) service: Rc<S>,
    pub(crate) resolver: Arc<RoutingResolver>,
}
