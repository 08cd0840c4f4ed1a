pub mod effective_host;
pub mod routing_error;
pub mod routing_middleware;
pub mod routing_resolver;
pub mod routing_template;
