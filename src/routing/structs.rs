/// Host value a request was routed to.
pub mod effective_host;

/// actix-web middleware rewriting the request host.
pub mod routing_middleware;

/// Store-backed host resolution.
pub mod routing_resolver;

/// Domain template holding the token placeholder.
pub mod routing_template;
